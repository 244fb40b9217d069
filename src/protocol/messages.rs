//! Protocol messages for quiz requests and responses.
//!
//! All messages are serialized as JSON.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::models::Question;
use crate::quiz::{build_quiz, QuizRequest};

/// Messages sent from client to server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClientMessage {
    /// Client asks for a new quiz.
    StartQuiz(QuizRequest),
}

/// Messages sent from server to client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ServerMessage {
    /// Generated quiz, in play order.
    QuizQuestions { questions: Vec<Question> },

    /// Request rejected or quiz could not be generated.
    Error { message: String },
}

/// Option counts a quiz may use.
pub const OPTION_COUNTS: [usize; 2] = [4, 6];

/// Quiz lengths a client may request.
pub const QUIZ_LENGTHS: [usize; 3] = [5, 10, 15];

/// Quiz length when the request does not name one.
pub const DEFAULT_QUIZ_LENGTH: usize = 10;

/// Validates the number of answer options per question.
pub fn validate_option_count(count: usize) -> Result<(), &'static str> {
    if !OPTION_COUNTS.contains(&count) {
        return Err("Option count must be 4 or 6");
    }
    Ok(())
}

/// Validates the number of questions in a quiz.
pub fn validate_quiz_length(length: usize) -> Result<(), &'static str> {
    if !QUIZ_LENGTHS.contains(&length) {
        return Err("Quiz length must be 5, 10 or 15");
    }
    Ok(())
}

/// Answer a client message.
pub fn respond<R: Rng + ?Sized>(rng: &mut R, msg: ClientMessage) -> ServerMessage {
    match msg {
        ClientMessage::StartQuiz(request) => quiz_response(&start_quiz(rng, &request)),
    }
}

/// Validate a quiz request and build its questions, logging failures.
pub fn start_quiz<R: Rng + ?Sized>(
    rng: &mut R,
    request: &QuizRequest,
) -> Result<Vec<Question>, QuizError> {
    let result = request.validate().and_then(|spec| build_quiz(rng, &spec));
    if let Err(e) = &result {
        if e.is_client_error() {
            log::info!("rejected quiz request {:?}: {}", request, e);
        } else {
            log::error!("quiz generation error for {:?}: {}", request, e);
        }
    }
    result
}

/// Wire message for a quiz result; errors carry only the user-facing text.
pub fn quiz_response(result: &Result<Vec<Question>, QuizError>) -> ServerMessage {
    match result {
        Ok(questions) => ServerMessage::QuizQuestions {
            questions: questions.clone(),
        },
        Err(e) => ServerMessage::Error {
            message: e.client_message().to_string(),
        },
    }
}

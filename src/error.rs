//! Error types for question generation and quiz building.

use thiserror::Error;

/// Errors emitted by the question generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GeneratorError {
    /// The difficulty name is not one of `easy`, `normal`, `hard`, `genius`.
    #[error("invalid difficulty: {0:?}")]
    InvalidDifficulty(String),
    /// The generator could not produce a well-formed question.
    #[error("question generation failed: {0}")]
    GenerationFailed(String),
}

impl GeneratorError {
    pub(crate) fn failed(reason: impl Into<String>) -> Self {
        GeneratorError::GenerationFailed(reason.into())
    }

    /// Whether a fresh attempt with new randomness may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, GeneratorError::GenerationFailed(_))
    }
}

/// Errors emitted while validating a quiz request or building a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("invalid difficulty: {0:?}")]
    InvalidDifficulty(String),
    #[error("invalid option count: {0}")]
    InvalidOptionCount(usize),
    #[error("invalid quiz length: {0}")]
    InvalidQuizLength(usize),
    #[error(transparent)]
    Generation(#[from] GeneratorError),
    /// Generated questions kept failing the shape check.
    #[error("generated question failed verification: {0}")]
    InvalidQuestion(GeneratorError),
}

impl QuizError {
    /// Input errors the caller should report as a bad request.
    pub fn is_client_error(&self) -> bool {
        match self {
            QuizError::InvalidDifficulty(_)
            | QuizError::InvalidOptionCount(_)
            | QuizError::InvalidQuizLength(_) => true,
            QuizError::Generation(e) => !e.is_retryable(),
            QuizError::InvalidQuestion(_) => false,
        }
    }

    /// Message shown to the end user.
    pub fn client_message(&self) -> &'static str {
        match self {
            QuizError::InvalidDifficulty(_) => "Invalid difficulty",
            QuizError::InvalidOptionCount(_) => "Invalid option count",
            QuizError::InvalidQuizLength(_) => "Invalid quiz length",
            QuizError::Generation(GeneratorError::InvalidDifficulty(_)) => "Invalid difficulty",
            QuizError::Generation(_) => "Failed to generate quiz questions",
            QuizError::InvalidQuestion(_) => "Failed to generate valid quiz questions",
        }
    }
}

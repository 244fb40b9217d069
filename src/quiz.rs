//! Quiz building: validate a request, then generate and verify one question
//! per slot.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{GeneratorError, QuizError};
use crate::generator;
use crate::models::{Difficulty, Question};
use crate::protocol::{validate_option_count, validate_quiz_length, DEFAULT_QUIZ_LENGTH};

/// Attempts per question before the whole quiz fails.
pub const MAX_ATTEMPTS_PER_QUESTION: usize = 3;

/// Unvalidated quiz parameters as received from a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizRequest {
    pub difficulty: String,
    pub option_count: usize,
    #[serde(default = "default_quiz_length")]
    pub quiz_length: usize,
}

fn default_quiz_length() -> usize {
    DEFAULT_QUIZ_LENGTH
}

/// Validated quiz parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSpec {
    pub difficulty: Difficulty,
    pub option_count: usize,
    pub quiz_length: usize,
}

impl QuizRequest {
    pub fn validate(&self) -> Result<QuizSpec, QuizError> {
        let difficulty = self
            .difficulty
            .parse::<Difficulty>()
            .map_err(|_| QuizError::InvalidDifficulty(self.difficulty.clone()))?;
        validate_option_count(self.option_count)
            .map_err(|_| QuizError::InvalidOptionCount(self.option_count))?;
        validate_quiz_length(self.quiz_length)
            .map_err(|_| QuizError::InvalidQuizLength(self.quiz_length))?;
        Ok(QuizSpec {
            difficulty,
            option_count: self.option_count,
            quiz_length: self.quiz_length,
        })
    }
}

/// Build a full quiz with the default generator.
pub fn build_quiz<R: Rng + ?Sized>(rng: &mut R, spec: &QuizSpec) -> Result<Vec<Question>, QuizError> {
    build_quiz_with(rng, spec, generator::generate_with::<R>)
}

/// Build a quiz from any question source, verifying every question and
/// regenerating failed ones up to `MAX_ATTEMPTS_PER_QUESTION` times.
pub fn build_quiz_with<R, F>(
    rng: &mut R,
    spec: &QuizSpec,
    mut generate: F,
) -> Result<Vec<Question>, QuizError>
where
    R: Rng + ?Sized,
    F: FnMut(&mut R, Difficulty, usize) -> Result<Question, GeneratorError>,
{
    let mut questions = Vec::with_capacity(spec.quiz_length);
    for slot in 0..spec.quiz_length {
        let question = generate_verified(rng, spec, slot, &mut generate)?;
        questions.push(question);
    }
    log::info!(
        "built {} question quiz ({}, {} options)",
        questions.len(),
        spec.difficulty,
        spec.option_count
    );
    Ok(questions)
}

fn generate_verified<R, F>(
    rng: &mut R,
    spec: &QuizSpec,
    slot: usize,
    generate: &mut F,
) -> Result<Question, QuizError>
where
    R: Rng + ?Sized,
    F: FnMut(&mut R, Difficulty, usize) -> Result<Question, GeneratorError>,
{
    let mut last_error = None;
    for attempt in 1..=MAX_ATTEMPTS_PER_QUESTION {
        let error = match generate(rng, spec.difficulty, spec.option_count) {
            Ok(question) => match question.validate(spec.option_count) {
                Ok(()) => return Ok(question),
                Err(e) => QuizError::InvalidQuestion(e),
            },
            Err(e) if e.is_retryable() => QuizError::Generation(e),
            Err(e) => return Err(e.into()),
        };
        log::warn!("question {} attempt {} rejected: {}", slot + 1, attempt, error);
        last_error = Some(error);
    }
    let error = last_error
        .unwrap_or_else(|| QuizError::Generation(GeneratorError::failed("no attempts made")));
    log::error!("giving up on question {}: {}", slot + 1, error);
    Err(error)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::models::Category;

    fn request(difficulty: &str, option_count: usize, quiz_length: usize) -> QuizRequest {
        QuizRequest {
            difficulty: difficulty.to_string(),
            option_count,
            quiz_length,
        }
    }

    fn fixed_question() -> Question {
        Question {
            id: "fixed".to_string(),
            question_text: "What is 1 + 1?".to_string(),
            category: Category::Arithmetic,
            correct_answer: "2".to_string(),
            options: vec!["1".into(), "2".into(), "3".into(), "4".into()],
        }
    }

    #[test]
    fn test_validate_request() {
        let spec = request("hard", 6, 15).validate().unwrap();
        assert_eq!(spec.difficulty, Difficulty::Hard);
        assert_eq!(spec.option_count, 6);
        assert_eq!(spec.quiz_length, 15);

        assert_eq!(
            request("impossible", 4, 10).validate(),
            Err(QuizError::InvalidDifficulty("impossible".to_string()))
        );
        assert_eq!(request("easy", 5, 10).validate(), Err(QuizError::InvalidOptionCount(5)));
        assert_eq!(request("easy", 4, 12).validate(), Err(QuizError::InvalidQuizLength(12)));
    }

    #[test]
    fn test_default_quiz_length() {
        let req: QuizRequest =
            serde_json::from_str(r#"{"difficulty":"easy","optionCount":4}"#).unwrap();
        assert_eq!(req.quiz_length, 10);
    }

    #[test]
    fn test_build_quiz_length_and_shape() {
        let mut rng = StdRng::seed_from_u64(2024);
        for difficulty in Difficulty::ALL {
            for (options, length) in [(4, 5), (6, 10), (4, 15)] {
                let spec = QuizSpec { difficulty, option_count: options, quiz_length: length };
                let quiz = build_quiz(&mut rng, &spec).unwrap();
                assert_eq!(quiz.len(), length);
                assert!(quiz.iter().all(|q| q.validate(options).is_ok()));
            }
        }
    }

    #[test]
    fn test_retries_transient_failures() {
        let mut rng = StdRng::seed_from_u64(0);
        let spec = QuizSpec { difficulty: Difficulty::Easy, option_count: 4, quiz_length: 5 };
        let mut calls = 0;
        let quiz = build_quiz_with(&mut rng, &spec, |_, _, _| {
            calls += 1;
            if calls % 3 == 0 {
                Ok(fixed_question())
            } else {
                Err(GeneratorError::failed("unlucky"))
            }
        })
        .unwrap();
        assert_eq!(quiz.len(), 5);
        assert_eq!(calls, 15);
    }

    #[test]
    fn test_rejects_malformed_questions() {
        let mut rng = StdRng::seed_from_u64(0);
        let spec = QuizSpec { difficulty: Difficulty::Easy, option_count: 4, quiz_length: 5 };
        let mut calls = 0;
        let result = build_quiz_with(&mut rng, &spec, |_, _, _| {
            calls += 1;
            let mut q = fixed_question();
            q.options[0] = "2".to_string();
            Ok(q)
        });
        assert!(matches!(
            result,
            Err(QuizError::InvalidQuestion(GeneratorError::GenerationFailed(_)))
        ));
        assert_eq!(calls, MAX_ATTEMPTS_PER_QUESTION);
    }

    #[test]
    fn test_exhausted_generation_keeps_generation_error() {
        let mut rng = StdRng::seed_from_u64(0);
        let spec = QuizSpec { difficulty: Difficulty::Easy, option_count: 4, quiz_length: 5 };
        let result = build_quiz_with(&mut rng, &spec, |_, _, _| {
            Err(GeneratorError::failed("cap"))
        });
        let error = result.unwrap_err();
        assert_eq!(error, QuizError::Generation(GeneratorError::failed("cap")));
        assert_eq!(error.client_message(), "Failed to generate quiz questions");
    }

    #[test]
    fn test_non_retryable_error_stops_immediately() {
        let mut rng = StdRng::seed_from_u64(0);
        let spec = QuizSpec { difficulty: Difficulty::Easy, option_count: 4, quiz_length: 5 };
        let mut calls = 0;
        let result = build_quiz_with(&mut rng, &spec, |_, _, _| {
            calls += 1;
            Err(GeneratorError::InvalidDifficulty("x".to_string()))
        });
        assert!(result.is_err());
        assert_eq!(calls, 1);
    }
}

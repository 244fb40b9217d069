//! # math-quiz
//!
//! Procedural math question generation for timed multiple-choice quizzes.
//!
//! ## Usage
//!
//! ```rust
//! use math_quiz::{generate, Difficulty, GeneratorError};
//!
//! fn main() -> Result<(), GeneratorError> {
//!     let question = generate(Difficulty::Hard, 4)?;
//!
//!     assert_eq!(question.options.len(), 4);
//!     assert!(question.options.contains(&question.correct_answer));
//!
//!     Ok(())
//! }
//! ```
//!
//! Pass a seeded `rand` generator to [`generate_with`] for reproducible
//! questions, or use [`quiz::build_quiz`] to build and verify a full quiz.

mod error;
pub mod generator;
pub mod logging;
mod models;
pub mod protocol;
pub mod quiz;

pub use error::{GeneratorError, QuizError};
pub use generator::{generate, generate_in_category, generate_named, generate_with};
pub use models::{Category, Difficulty, Question};
pub use quiz::{build_quiz, QuizRequest, QuizSpec};

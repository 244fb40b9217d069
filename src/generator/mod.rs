//! Procedural math question generator.
//!
//! Every call picks a category uniformly at random, builds a problem for the
//! requested difficulty, synthesizes distinct wrong options around the
//! correct answer and shuffles them. Calls are independent; all randomness
//! comes from the `Rng` passed in, so a seeded generator reproduces a
//! question exactly.

mod algebra;
mod arithmetic;
mod distractors;
mod geometry;
mod problem;
mod statistics;
mod value;

use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Builder;

use crate::error::GeneratorError;
use crate::models::{Category, Difficulty, Question};

pub use distractors::MAX_CANDIDATE_DRAWS;

use problem::Problem;
use value::Value;

/// Generate one question using the thread-local random source.
pub fn generate(difficulty: Difficulty, option_count: usize) -> Result<Question, GeneratorError> {
    generate_with(&mut rand::rng(), difficulty, option_count)
}

/// Generate one question drawing from `rng`.
pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    difficulty: Difficulty,
    option_count: usize,
) -> Result<Question, GeneratorError> {
    let category = Category::ALL[rng.random_range(0..Category::ALL.len())];
    generate_in_category(rng, category, difficulty, option_count)
}

/// Generate one question from a difficulty name such as `"hard"`.
///
/// # Errors
///
/// Returns `GeneratorError::InvalidDifficulty` for an unknown name.
pub fn generate_named<R: Rng + ?Sized>(
    rng: &mut R,
    difficulty: &str,
    option_count: usize,
) -> Result<Question, GeneratorError> {
    let difficulty = difficulty.parse()?;
    generate_with(rng, difficulty, option_count)
}

/// Generate one question of a fixed category.
pub fn generate_in_category<R: Rng + ?Sized>(
    rng: &mut R,
    category: Category,
    difficulty: Difficulty,
    option_count: usize,
) -> Result<Question, GeneratorError> {
    let problem = build_problem(category, difficulty, rng);
    assemble(rng, category, difficulty, problem, option_count)
}

fn build_problem<R: Rng + ?Sized>(category: Category, difficulty: Difficulty, rng: &mut R) -> Problem {
    match category {
        Category::Arithmetic => arithmetic::build(difficulty, rng),
        Category::Algebra => algebra::build(difficulty, rng),
        Category::Geometry => geometry::build(difficulty, rng),
        Category::Statistics => statistics::build(difficulty, rng),
    }
}

fn assemble<R: Rng + ?Sized>(
    rng: &mut R,
    category: Category,
    difficulty: Difficulty,
    problem: Problem,
    option_count: usize,
) -> Result<Question, GeneratorError> {
    let mut options = distractors::synthesize(&problem, difficulty, option_count, rng)?;
    options.shuffle(rng);

    let question = Question {
        id: Builder::from_random_bytes(rng.random()).into_uuid().to_string(),
        question_text: problem.text,
        category,
        correct_answer: problem.answer.to_string(),
        options: options.iter().map(Value::to_string).collect(),
    };
    question.validate(option_count)?;

    log::debug!(
        "generated {} {} question {}: {}",
        difficulty,
        category,
        question.id,
        question.question_text
    );
    Ok(question)
}

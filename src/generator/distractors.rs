//! Wrong-answer synthesis.

use rand::Rng;

use crate::error::GeneratorError;
use crate::models::Difficulty;

use super::problem::Problem;
use super::value::{div_round, Value};

/// Hard cap on candidate draws for one question.
pub const MAX_CANDIDATE_DRAWS: usize = 1000;

/// Smallest offset range (in whole numbers) and the share of the answer's
/// magnitude used when that is larger.
fn spread(difficulty: Difficulty) -> (i64, i64) {
    match difficulty {
        Difficulty::Easy => (5, 10),
        Difficulty::Normal => (10, 15),
        Difficulty::Hard => (15, 20),
        Difficulty::Genius => (20, 25),
    }
}

/// Largest distance from the answer, in the answer's own units.
///
/// The window is never narrower than `count` whole steps, so the values above
/// the answer alone can fill every option even when negatives are rejected.
pub fn max_offset(answer: Value, difficulty: Difficulty, count: usize) -> i64 {
    let (floor, percent) = spread(difficulty);
    let proportional = div_round(answer.units().abs() * percent, 100);
    let by_count = i64::try_from(count).unwrap_or(i64::MAX / 100) * answer.scale();
    (floor * answer.scale()).max(proportional).max(by_count)
}

/// Builds `count` distinct values, the correct answer first.
///
/// At the genius tier the problem's mistake values are tried before random
/// perturbations of the answer.
pub fn synthesize<R: Rng + ?Sized>(
    problem: &Problem,
    difficulty: Difficulty,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Value>, GeneratorError> {
    let answer = problem.answer;
    let max = max_offset(answer, difficulty, count);
    let mut mistakes = if difficulty == Difficulty::Genius {
        problem.mistakes.clone()
    } else {
        Vec::new()
    }
    .into_iter();

    fill_options(problem, count, || {
        if let Some(mistake) = mistakes.next() {
            return mistake;
        }
        let magnitude = rng.random_range(1..=max);
        let offset = if rng.random_bool(0.5) { magnitude } else { -magnitude };
        answer.with_units(answer.units() + offset)
    })
}

/// Draws candidates from `propose` until `count` options exist, rejecting
/// anything invalid or already present.
pub fn fill_options<F>(
    problem: &Problem,
    count: usize,
    mut propose: F,
) -> Result<Vec<Value>, GeneratorError>
where
    F: FnMut() -> Value,
{
    if count < 2 {
        return Err(GeneratorError::failed(format!(
            "at least 2 options are required, got {}",
            count
        )));
    }

    let mut options = Vec::with_capacity(count);
    options.push(problem.answer);
    let mut draws = 0;
    while options.len() < count {
        if draws == MAX_CANDIDATE_DRAWS {
            return Err(GeneratorError::failed(format!(
                "only {} of {} options after {} draws",
                options.len(),
                count,
                draws
            )));
        }
        draws += 1;

        let candidate = propose();
        if accepts(problem, &options, candidate) {
            options.push(candidate);
        }
    }
    log::trace!("synthesized {} options in {} draws", options.len(), draws);
    Ok(options)
}

fn accepts(problem: &Problem, options: &[Value], candidate: Value) -> bool {
    candidate.same_kind(problem.answer)
        && !(problem.non_negative && candidate.is_negative())
        && !options.contains(&candidate)
}

//! Arithmetic problems.

use rand::Rng;

use crate::models::Difficulty;

use super::problem::Problem;
use super::value::{div_round, Value};

/// A single arithmetic operation with its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add(i64, i64),
    Subtract(i64, i64),
    Multiply(i64, i64),
    /// Quotient rounded to two decimals.
    Divide(i64, i64),
    /// Dividend built as `divisor × quotient`, so the result is whole.
    ExactDivide { quotient: i64, divisor: i64 },
    Power { base: i64, exponent: u32 },
    Root { root: i64, degree: u32 },
    Modulo(i64, i64),
    /// `whole` is a multiple of 20 and `percent` a multiple of 5.
    PercentOf { percent: i64, whole: i64 },
    /// `(a × b) ÷ b`
    ProductQuotient(i64, i64),
}

impl Operation {
    pub fn text(&self) -> String {
        match *self {
            Operation::Add(a, b) => format!("What is {} + {}?", a, b),
            Operation::Subtract(a, b) => format!("What is {} - {}?", a, b),
            Operation::Multiply(a, b) => format!("What is {} \\times {}?", a, b),
            Operation::Divide(a, b) => {
                format!("What is {} \\div {}? (Round to 2 decimal places)", a, b)
            }
            Operation::ExactDivide { quotient, divisor } => {
                format!("What is {} \\div {}?", quotient * divisor, divisor)
            }
            Operation::Power { base, exponent } => format!("What is {}^{{{}}}?", base, exponent),
            Operation::Root { root, degree: 2 } => format!("What is \\sqrt{{{}}}?", root * root),
            Operation::Root { root, degree } => {
                format!("What is \\sqrt[{}]{{{}}}?", degree, root.pow(degree))
            }
            Operation::Modulo(a, b) => format!("What is {} \\bmod {}?", a, b),
            Operation::PercentOf { percent, whole } => {
                format!("What is {}\\% of {}?", percent, whole)
            }
            Operation::ProductQuotient(a, b) => {
                format!("What is ({} \\times {}) \\div {}?", a, b, b)
            }
        }
    }

    pub fn answer(&self) -> Value {
        match *self {
            Operation::Add(a, b) => Value::Whole(a + b),
            Operation::Subtract(a, b) => Value::Whole(a - b),
            Operation::Multiply(a, b) => Value::Whole(a * b),
            Operation::Divide(a, b) => Value::Hundredths(div_round(a * 100, b)),
            Operation::ExactDivide { quotient, .. } => Value::Whole(quotient),
            Operation::Power { base, exponent } => Value::Whole(base.pow(exponent)),
            Operation::Root { root, .. } => Value::Whole(root),
            Operation::Modulo(a, b) => Value::Whole(a.rem_euclid(b)),
            Operation::PercentOf { percent, whole } => Value::Whole(percent * whole / 100),
            Operation::ProductQuotient(a, _) => Value::Whole(a),
        }
    }

    /// Answers produced by the usual slips for this operation.
    pub fn mistakes(&self) -> Vec<Value> {
        match *self {
            Operation::Add(a, b) => vec![Value::Whole(a - b)],
            Operation::Subtract(a, b) => vec![Value::Whole(a + b), Value::Whole(b - a)],
            Operation::Multiply(a, b) => vec![Value::Whole(a + b), Value::Whole(a * (b + 1))],
            Operation::Divide(a, b) => vec![
                Value::Hundredths(a * b * 100),
                Value::Hundredths(div_round(b * 100, a)),
            ],
            Operation::ExactDivide { quotient, divisor } => vec![
                Value::Whole(quotient * divisor * divisor),
                Value::Whole(quotient * divisor - divisor),
            ],
            Operation::Power { base, exponent } => vec![
                Value::Whole(base * i64::from(exponent)),
                Value::Whole(base.pow(exponent + 1)),
            ],
            Operation::Root { root, degree } => vec![
                Value::Whole(root.pow(degree) / i64::from(degree)),
                Value::Whole(root * i64::from(degree)),
            ],
            Operation::Modulo(a, b) => vec![Value::Whole(a / b), Value::Whole(b - a.rem_euclid(b))],
            Operation::PercentOf { percent, whole } => vec![
                Value::Whole(percent * whole / 10),
                Value::Whole(whole - percent * whole / 100),
            ],
            Operation::ProductQuotient(a, b) => vec![Value::Whole(a * b), Value::Whole(a + b)],
        }
    }

    pub fn problem(&self) -> Problem {
        Problem::new(self.text(), self.answer()).with_mistakes(self.mistakes())
    }
}

pub fn build<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Problem {
    pick_operation(difficulty, rng).problem()
}

pub fn pick_operation<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Operation {
    match difficulty {
        Difficulty::Easy => {
            let a = rng.random_range(1..=20);
            let b = rng.random_range(1..=20);
            if rng.random_bool(0.5) {
                Operation::Add(a, b)
            } else {
                Operation::Subtract(a, b)
            }
        }
        Difficulty::Normal => {
            let a = rng.random_range(10..=59);
            let b = rng.random_range(10..=59);
            match rng.random_range(0..3) {
                0 => Operation::Add(a, b),
                1 => Operation::Subtract(a, b),
                _ => Operation::Multiply(a, b),
            }
        }
        Difficulty::Hard => match rng.random_range(0..4) {
            0 => Operation::Add(rng.random_range(100..=999), rng.random_range(100..=999)),
            1 => Operation::Subtract(rng.random_range(100..=999), rng.random_range(100..=999)),
            2 => Operation::Multiply(rng.random_range(11..=99), rng.random_range(3..=19)),
            _ => Operation::Divide(rng.random_range(10..=109), rng.random_range(2..=11)),
        },
        Difficulty::Genius => match rng.random_range(0..8) {
            0 => {
                let (a, b) = (rng.random_range(1000..=9999), rng.random_range(1000..=9999));
                if rng.random_bool(0.5) {
                    Operation::Add(a, b)
                } else {
                    Operation::Subtract(a, b)
                }
            }
            1 => Operation::Multiply(rng.random_range(12..=99), rng.random_range(12..=99)),
            2 => Operation::ExactDivide {
                quotient: rng.random_range(12..=120),
                divisor: rng.random_range(6..=30),
            },
            3 => Operation::Power {
                base: rng.random_range(2..=12),
                exponent: rng.random_range(2..=4),
            },
            4 => {
                if rng.random_bool(0.5) {
                    Operation::Root { root: rng.random_range(11..=30), degree: 2 }
                } else {
                    Operation::Root { root: rng.random_range(2..=12), degree: 3 }
                }
            }
            5 => Operation::Modulo(rng.random_range(100..=999), rng.random_range(3..=29)),
            6 => Operation::PercentOf {
                percent: rng.random_range(1..=19) * 5,
                whole: rng.random_range(2..=50) * 20,
            },
            _ => Operation::ProductQuotient(rng.random_range(100..=1099), rng.random_range(10..=109)),
        },
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_easy_addition() {
        let op = Operation::Add(7, 5);
        assert_eq!(op.text(), "What is 7 + 5?");
        assert_eq!(op.answer(), Value::Whole(12));
        assert_eq!(op.mistakes(), vec![Value::Whole(2)]);
    }

    #[test]
    fn test_rounded_division() {
        let op = Operation::Divide(84, 6);
        assert_eq!(op.answer().to_string(), "14.00");
        assert_eq!(op.answer().units() as f64 / 100.0, 84.0 / 6.0);
        assert_eq!(Operation::Divide(100, 3).answer().to_string(), "33.33");
        assert_eq!(Operation::Divide(20, 3).answer().to_string(), "6.67");
        // Offering the product instead of the quotient.
        assert!(op.mistakes().contains(&Value::Hundredths(504 * 100)));
    }

    #[test]
    fn test_exact_division_is_answer_first() {
        let op = Operation::ExactDivide { quotient: 14, divisor: 6 };
        assert_eq!(op.text(), "What is 84 \\div 6?");
        assert_eq!(op.answer(), Value::Whole(14));
    }

    #[test]
    fn test_compound_operations() {
        assert_eq!(Operation::Power { base: 3, exponent: 4 }.answer(), Value::Whole(81));
        let root = Operation::Root { root: 12, degree: 2 };
        assert_eq!(root.text(), "What is \\sqrt{144}?");
        assert_eq!(root.answer(), Value::Whole(12));
        let cube = Operation::Root { root: 3, degree: 3 };
        assert_eq!(cube.text(), "What is \\sqrt[3]{27}?");
        assert_eq!(Operation::Modulo(100, 7).answer(), Value::Whole(2));
        let pct = Operation::PercentOf { percent: 35, whole: 240 };
        assert_eq!(pct.answer(), Value::Whole(84));
        assert_eq!(Operation::ProductQuotient(123, 45).answer(), Value::Whole(123));
    }

    #[test]
    fn test_multiply_mistake_is_sum() {
        let op = Operation::Multiply(12, 13);
        assert!(op.mistakes().contains(&Value::Whole(25)));
    }

    #[test]
    fn test_genius_answers_are_whole() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let op = pick_operation(Difficulty::Genius, &mut rng);
            assert!(matches!(op.answer(), Value::Whole(_)), "{:?}", op);
        }
    }

    #[test]
    fn test_easy_uses_add_or_subtract() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            match pick_operation(Difficulty::Easy, &mut rng) {
                Operation::Add(a, b) | Operation::Subtract(a, b) => {
                    assert!((1..=20).contains(&a) && (1..=20).contains(&b));
                }
                other => panic!("unexpected easy operation {:?}", other),
            }
        }
    }
}

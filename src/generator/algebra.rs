//! Algebra problems, built answer first: the solution is drawn and the
//! coefficients are derived from it.

use rand::Rng;

use crate::models::Difficulty;

use super::problem::Problem;
use super::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Equation {
    /// `x + addend = rhs`; a negative addend reads as subtraction.
    Shifted { x: i64, addend: i64 },
    /// `m x = rhs`
    Scaled { m: i64, x: i64 },
    /// `m x + c = rhs`
    Linear { m: i64, c: i64, x: i64 },
    /// `a x + b = c x + d` with `a != c`.
    TwoSided { a: i64, b: i64, c: i64, x: i64 },
    /// `x^2 - x0^2 = 0`, asking for the positive root.
    DifferenceOfSquares { x: i64 },
    /// `x^2 - (r1 + r2) x + r1 r2 = 0`, asking for the larger root.
    Quadratic { smaller: i64, larger: i64 },
    /// `a (x - r)^2 = 0` expanded.
    PerfectSquare { a: i64, r: i64 },
}

impl Equation {
    pub fn solution(&self) -> i64 {
        match *self {
            Equation::Shifted { x, .. }
            | Equation::Scaled { x, .. }
            | Equation::Linear { x, .. }
            | Equation::TwoSided { x, .. }
            | Equation::DifferenceOfSquares { x } => x,
            Equation::Quadratic { larger, .. } => larger,
            Equation::PerfectSquare { r, .. } => r,
        }
    }

    pub fn text(&self) -> String {
        match *self {
            Equation::Shifted { x, addend } => {
                format!("Solve for x: {} = {}", render_terms(&[(1, "x"), (addend, "")]), x + addend)
            }
            Equation::Scaled { m, x } => {
                format!("Solve for x: {} = {}", render_terms(&[(m, "x")]), m * x)
            }
            Equation::Linear { m, c, x } => {
                format!("Solve for x: {} = {}", render_terms(&[(m, "x"), (c, "")]), m * x + c)
            }
            Equation::TwoSided { a, b, c, x } => {
                let d = (a - c) * x + b;
                format!(
                    "Solve for x: {} = {}",
                    render_terms(&[(a, "x"), (b, "")]),
                    render_terms(&[(c, "x"), (d, "")])
                )
            }
            Equation::DifferenceOfSquares { x } => format!(
                "Solve for the positive x: {} = 0",
                render_terms(&[(1, "x^{2}"), (-(x * x), "")])
            ),
            Equation::Quadratic { smaller, larger } => format!(
                "Solve for the larger root: {} = 0",
                render_terms(&[
                    (1, "x^{2}"),
                    (-(smaller + larger), "x"),
                    (smaller * larger, ""),
                ])
            ),
            Equation::PerfectSquare { a, r } => format!(
                "Solve for x: {} = 0",
                render_terms(&[(a, "x^{2}"), (-2 * a * r, "x"), (a * r * r, "")])
            ),
        }
    }

    pub fn mistakes(&self) -> Vec<i64> {
        match *self {
            Equation::Shifted { x, addend } => vec![x + 2 * addend, x + addend],
            Equation::Scaled { m, x } => vec![m * x - m, m * x],
            Equation::Linear { m, c, x } => {
                let rhs = m * x + c;
                vec![(rhs + c) / m, rhs - c]
            }
            Equation::TwoSided { a, b, c, x } => {
                let d = (a - c) * x + b;
                vec![(d - b) / (a + c), (d + b) / (a - c)]
            }
            Equation::DifferenceOfSquares { x } => vec![x * x / 2, x * x],
            Equation::Quadratic { smaller, larger } => {
                vec![smaller, -larger, smaller + larger]
            }
            Equation::PerfectSquare { r, .. } => vec![-r, 2 * r, r * r],
        }
    }

    pub fn problem(&self) -> Problem {
        Problem::new(self.text(), Value::Whole(self.solution()))
            .with_mistakes(self.mistakes().into_iter().map(Value::Whole))
    }
}

/// Renders `coef·var` terms with signs folded into the operators.
fn render_terms(terms: &[(i64, &str)]) -> String {
    let mut out = String::new();
    for &(coef, var) in terms {
        if coef == 0 {
            continue;
        }
        let magnitude = coef.unsigned_abs();
        let body = match (var.is_empty(), magnitude) {
            (true, _) => magnitude.to_string(),
            (false, 1) => var.to_string(),
            (false, _) => format!("{}{}", magnitude, var),
        };
        if out.is_empty() {
            if coef < 0 {
                out.push('-');
            }
        } else {
            out.push_str(if coef < 0 { " - " } else { " + " });
        }
        out.push_str(&body);
    }
    if out.is_empty() {
        out.push('0');
    }
    out
}

pub fn build<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Problem {
    pick_equation(difficulty, rng).problem()
}

pub fn pick_equation<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Equation {
    match difficulty {
        Difficulty::Easy => {
            let addend = rng.random_range(1..=10);
            Equation::Shifted {
                x: rng.random_range(1..=10),
                addend: if rng.random_bool(0.5) { addend } else { -addend },
            }
        }
        Difficulty::Normal => {
            let m = rng.random_range(2..=9);
            if rng.random_bool(0.5) {
                Equation::Scaled { m, x: rng.random_range(1..=12) }
            } else {
                Equation::Linear {
                    m,
                    c: rng.random_range(1..=20),
                    x: rng.random_range(-10..=10),
                }
            }
        }
        Difficulty::Hard => {
            if rng.random_bool(0.5) {
                Equation::DifferenceOfSquares { x: rng.random_range(2..=15) }
            } else {
                let a = rng.random_range(3..=9);
                Equation::TwoSided {
                    a,
                    b: rng.random_range(-20..=20),
                    c: rng.random_range(1..a),
                    x: rng.random_range(-10..=10),
                }
            }
        }
        Difficulty::Genius => match rng.random_range(0..3) {
            0 => {
                let smaller = rng.random_range(-9..=9);
                Equation::Quadratic {
                    smaller,
                    larger: smaller + rng.random_range(1..=12),
                }
            }
            1 => {
                let r = rng.random_range(1..=6);
                Equation::PerfectSquare {
                    a: rng.random_range(2..=6),
                    r: if rng.random_bool(0.5) { r } else { -r },
                }
            }
            _ => {
                let a = rng.random_range(6..=15);
                Equation::TwoSided {
                    a,
                    b: rng.random_range(-50..=50),
                    c: rng.random_range(1..a),
                    x: rng.random_range(-20..=20),
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_linear_substitution_reproduces_rhs() {
        let eq = Equation::Linear { m: 3, c: 7, x: 4 };
        assert_eq!(eq.text(), "Solve for x: 3x + 7 = 19");
        let rhs: i64 = eq.text().rsplit("= ").next().unwrap().parse().unwrap();
        assert_eq!(3 * 4 + 7, rhs);
        assert_eq!(eq.solution(), 4);
    }

    #[test]
    fn test_generated_linear_equations_hold() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..300 {
            let eq = pick_equation(Difficulty::Normal, &mut rng);
            let (m, c, x) = match eq {
                Equation::Scaled { m, x } => (m, 0, x),
                Equation::Linear { m, c, x } => (m, c, x),
                other => panic!("unexpected normal equation {:?}", other),
            };
            let rhs: i64 = eq.text().rsplit("= ").next().unwrap().parse().unwrap();
            assert_eq!(m * x + c, rhs, "{}", eq.text());
        }
    }

    #[test]
    fn test_render_terms() {
        assert_eq!(render_terms(&[(1, "x"), (-5, "")]), "x - 5");
        assert_eq!(render_terms(&[(-1, "x"), (0, "")]), "-x");
        assert_eq!(render_terms(&[(0, "x")]), "0");
        assert_eq!(
            render_terms(&[(1, "x^{2}"), (-5, "x"), (6, "")]),
            "x^{2} - 5x + 6"
        );
    }

    #[test]
    fn test_quadratic_roots_satisfy_equation() {
        let eq = Equation::Quadratic { smaller: 2, larger: 3 };
        assert_eq!(eq.text(), "Solve for the larger root: x^{2} - 5x + 6 = 0");
        let x = eq.solution();
        assert_eq!(x * x - 5 * x + 6, 0);

        let eq = Equation::PerfectSquare { a: 2, r: 1 };
        assert_eq!(eq.text(), "Solve for x: 2x^{2} - 4x + 2 = 0");
        assert_eq!(eq.solution(), 1);
    }

    #[test]
    fn test_two_sided_solution() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..300 {
            if let Equation::TwoSided { a, b, c, x } = pick_equation(Difficulty::Genius, &mut rng) {
                let d = (a - c) * x + b;
                assert_eq!(a * x + b, c * x + d);
            }
        }
    }

    #[test]
    fn test_difference_of_squares() {
        let eq = Equation::DifferenceOfSquares { x: 7 };
        assert_eq!(eq.text(), "Solve for the positive x: x^{2} - 49 = 0");
        assert_eq!(eq.problem().answer, Value::Whole(7));
    }
}

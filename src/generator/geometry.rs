//! Geometry problems. π is taken as 3.14 and every formula that uses it is
//! evaluated in exact hundredths.

use rand::Rng;

use crate::models::Difficulty;

use super::problem::Problem;
use super::value::{div_round, Value};

/// π in hundredths.
const PI_HUNDREDTHS: i64 = 314;

const PI_NOTE: &str = "(Use π ≈ 3.14)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Figure {
    CircleArea { r: i64 },
    RectangleArea { length: i64, width: i64 },
    SquarePerimeter { side: i64 },
    RectanglePerimeter { length: i64, width: i64 },
    CircleCircumference { r: i64 },
    RightTriangleArea { base: i64, height: i64 },
    CubeVolume { side: i64 },
    CylinderVolume { r: i64, height: i64 },
    BoxSurfaceArea { length: i64, width: i64, height: i64 },
    SphereSurfaceArea { r: i64 },
    SphereVolume { r: i64 },
    ConeVolume { r: i64, height: i64 },
}

impl Figure {
    pub fn text(&self) -> String {
        match *self {
            Figure::CircleArea { r } => {
                format!("What is the area of a circle with radius {}? {}", r, PI_NOTE)
            }
            Figure::RectangleArea { length, width } => format!(
                "What is the area of a rectangle with length {} and width {}?",
                length, width
            ),
            Figure::SquarePerimeter { side } => {
                format!("What is the perimeter of a square with side length {}?", side)
            }
            Figure::RectanglePerimeter { length, width } => format!(
                "What is the perimeter of a rectangle with length {} and width {}?",
                length, width
            ),
            Figure::CircleCircumference { r } => format!(
                "What is the circumference of a circle with radius {}? {}",
                r, PI_NOTE
            ),
            Figure::RightTriangleArea { base, height } => format!(
                "What is the area of a right triangle with legs {} and {}?",
                base, height
            ),
            Figure::CubeVolume { side } => {
                format!("What is the volume of a cube with side length {}?", side)
            }
            Figure::CylinderVolume { r, height } => format!(
                "What is the volume of a cylinder with radius {} and height {}? {}",
                r, height, PI_NOTE
            ),
            Figure::BoxSurfaceArea { length, width, height } => format!(
                "What is the surface area of a box measuring {} \\times {} \\times {}?",
                length, width, height
            ),
            Figure::SphereSurfaceArea { r } => format!(
                "What is the surface area of a sphere with radius {}? {}",
                r, PI_NOTE
            ),
            Figure::SphereVolume { r } => {
                format!("What is the volume of a sphere with radius {}? {}", r, PI_NOTE)
            }
            Figure::ConeVolume { r, height } => format!(
                "What is the volume of a cone with radius {} and height {}? {}",
                r, height, PI_NOTE
            ),
        }
    }

    pub fn answer(&self) -> Value {
        match *self {
            Figure::CircleArea { r } => Value::Hundredths(PI_HUNDREDTHS * r * r),
            Figure::RectangleArea { length, width } => Value::Whole(length * width),
            Figure::SquarePerimeter { side } => Value::Whole(4 * side),
            Figure::RectanglePerimeter { length, width } => Value::Whole(2 * (length + width)),
            Figure::CircleCircumference { r } => Value::Hundredths(2 * PI_HUNDREDTHS * r),
            Figure::RightTriangleArea { base, height } => Value::Hundredths(base * height * 50),
            Figure::CubeVolume { side } => Value::Whole(side.pow(3)),
            Figure::CylinderVolume { r, height } => {
                Value::Hundredths(PI_HUNDREDTHS * r * r * height)
            }
            Figure::BoxSurfaceArea { length, width, height } => {
                Value::Whole(2 * (length * width + length * height + width * height))
            }
            Figure::SphereSurfaceArea { r } => Value::Hundredths(4 * PI_HUNDREDTHS * r * r),
            Figure::SphereVolume { r } => Value::Hundredths(div_round(4 * PI_HUNDREDTHS * r.pow(3), 3)),
            Figure::ConeVolume { r, height } => {
                Value::Hundredths(div_round(PI_HUNDREDTHS * r * r * height, 3))
            }
        }
    }

    /// Answers from swapping in a neighbouring formula.
    pub fn mistakes(&self) -> Vec<Value> {
        match *self {
            Figure::CircleArea { r } => vec![Value::Hundredths(2 * PI_HUNDREDTHS * r)],
            Figure::RectangleArea { length, width } => vec![Value::Whole(2 * (length + width))],
            Figure::SquarePerimeter { side } => vec![Value::Whole(side * side)],
            Figure::RectanglePerimeter { length, width } => {
                vec![Value::Whole(length + width), Value::Whole(length * width)]
            }
            Figure::CircleCircumference { r } => vec![Value::Hundredths(PI_HUNDREDTHS * r * r)],
            Figure::RightTriangleArea { base, height } => {
                vec![Value::Hundredths(base * height * 100)]
            }
            Figure::CubeVolume { side } => vec![Value::Whole(6 * side * side), Value::Whole(3 * side)],
            Figure::CylinderVolume { r, height } => {
                vec![Value::Hundredths(2 * PI_HUNDREDTHS * r * height)]
            }
            Figure::BoxSurfaceArea { length, width, height } => {
                vec![Value::Whole(length * width * height)]
            }
            Figure::SphereSurfaceArea { r } => vec![
                Value::Hundredths(PI_HUNDREDTHS * r * r),
                Value::Hundredths(2 * PI_HUNDREDTHS * r * r),
            ],
            Figure::SphereVolume { r } => vec![
                Value::Hundredths(4 * PI_HUNDREDTHS * r.pow(3)),
                Value::Hundredths(div_round(4 * PI_HUNDREDTHS * r * r, 3)),
            ],
            Figure::ConeVolume { r, height } => vec![
                Value::Hundredths(PI_HUNDREDTHS * r * r * height),
                Value::Hundredths(div_round(PI_HUNDREDTHS * r * height, 3)),
            ],
        }
    }

    pub fn problem(&self) -> Problem {
        Problem::new(self.text(), self.answer())
            .non_negative()
            .with_mistakes(self.mistakes())
    }
}

pub fn build<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Problem {
    pick_figure(difficulty, rng).problem()
}

pub fn pick_figure<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Figure {
    match (difficulty, rng.random_range(0..3)) {
        (Difficulty::Easy, 0) => Figure::CircleArea { r: rng.random_range(1..=5) },
        (Difficulty::Easy, 1) => Figure::RectangleArea {
            length: rng.random_range(2..=12),
            width: rng.random_range(1..=10),
        },
        (Difficulty::Easy, _) => Figure::SquarePerimeter { side: rng.random_range(1..=15) },
        (Difficulty::Normal, 0) => {
            let length = rng.random_range(1..=10);
            Figure::RectanglePerimeter { length, width: length + 2 }
        }
        (Difficulty::Normal, 1) => Figure::CircleCircumference { r: rng.random_range(2..=12) },
        (Difficulty::Normal, _) => Figure::RightTriangleArea {
            base: rng.random_range(3..=15),
            height: rng.random_range(3..=15),
        },
        (Difficulty::Hard, 0) => Figure::CubeVolume { side: rng.random_range(3..=12) },
        (Difficulty::Hard, 1) => Figure::CylinderVolume {
            r: rng.random_range(2..=8),
            height: rng.random_range(3..=15),
        },
        (Difficulty::Hard, _) => Figure::BoxSurfaceArea {
            length: rng.random_range(3..=15),
            width: rng.random_range(3..=15),
            height: rng.random_range(3..=15),
        },
        (Difficulty::Genius, 0) => Figure::SphereSurfaceArea { r: rng.random_range(5..=14) },
        (Difficulty::Genius, 1) => Figure::SphereVolume { r: rng.random_range(3..=12) },
        (Difficulty::Genius, _) => Figure::ConeVolume {
            r: rng.random_range(3..=12),
            height: rng.random_range(5..=20),
        },
    }
}

mod question;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeneratorError;

pub use question::Question;

/// Difficulty tier, ordered from easiest to hardest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
    Genius,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Normal,
        Difficulty::Hard,
        Difficulty::Genius,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
            Difficulty::Genius => "genius",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            "genius" => Ok(Difficulty::Genius),
            other => Err(GeneratorError::InvalidDifficulty(other.to_string())),
        }
    }
}

/// Mathematical domain of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Arithmetic,
    Algebra,
    Geometry,
    Statistics,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Arithmetic,
        Category::Algebra,
        Category::Geometry,
        Category::Statistics,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Arithmetic => "arithmetic",
            Category::Algebra => "algebra",
            Category::Geometry => "geometry",
            Category::Statistics => "statistics",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parse() {
        for d in Difficulty::ALL {
            assert_eq!(d.as_str().parse::<Difficulty>(), Ok(d));
        }
        assert_eq!(
            "impossible".parse::<Difficulty>(),
            Err(GeneratorError::InvalidDifficulty("impossible".to_string()))
        );
        // Names are case sensitive, like the wire format.
        assert!("Easy".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_difficulty_ordering() {
        assert!(Difficulty::Easy < Difficulty::Normal);
        assert!(Difficulty::Normal < Difficulty::Hard);
        assert!(Difficulty::Hard < Difficulty::Genius);
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&Category::Statistics).unwrap();
        assert_eq!(json, "\"statistics\"");
        assert_eq!("geometry".parse::<Category>(), Ok(Category::Geometry));
        assert!("calculus".parse::<Category>().is_err());
    }
}

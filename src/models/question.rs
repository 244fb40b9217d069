use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::GeneratorError;

use super::Category;

/// A generated multiple-choice question, as sent to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub question_text: String,
    pub category: Category,
    pub correct_answer: String,
    pub options: Vec<String>,
}

impl Question {
    /// Whether a submitted option matches the correct answer.
    pub fn is_correct(&self, answer: &str) -> bool {
        answer.trim() == self.correct_answer
    }

    /// Check the shape a client relies on: option count, a single correct
    /// option, distinct options and numeric answers.
    pub fn validate(&self, option_count: usize) -> Result<(), GeneratorError> {
        if self.id.is_empty() {
            return Err(GeneratorError::failed("question has no id"));
        }
        if self.question_text.trim().is_empty() {
            return Err(GeneratorError::failed("question has no text"));
        }
        if self.options.len() != option_count {
            return Err(GeneratorError::failed(format!(
                "expected {} options, got {}",
                option_count,
                self.options.len()
            )));
        }
        let correct = self.options.iter().filter(|o| self.is_correct(o)).count();
        if correct != 1 {
            return Err(GeneratorError::failed(format!(
                "correct answer {} appears {} times",
                self.correct_answer, correct
            )));
        }
        let mut seen = HashSet::with_capacity(self.options.len());
        for option in &self.options {
            if !is_numeric(option) {
                return Err(GeneratorError::failed(format!("non-numeric option {:?}", option)));
            }
            if !seen.insert(option.as_str()) {
                return Err(GeneratorError::failed(format!("duplicate option {}", option)));
            }
        }
        Ok(())
    }
}

fn is_numeric(s: &str) -> bool {
    s.parse::<f64>().is_ok_and(f64::is_finite)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Question {
        Question {
            id: "q-1".to_string(),
            question_text: "What is 7 + 5?".to_string(),
            category: Category::Arithmetic,
            correct_answer: "12".to_string(),
            options: vec!["10".into(), "12".into(), "15".into(), "9".into()],
        }
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        assert!(sample().validate(4).is_ok());
    }

    #[test]
    fn test_validate_rejects_malformed() {
        assert!(sample().validate(6).is_err());

        let mut q = sample();
        q.options[0] = "12".into();
        assert!(q.validate(4).is_err());

        let mut q = sample();
        q.options[0] = "NaN".into();
        assert!(q.validate(4).is_err());

        let mut q = sample();
        q.options[0] = "undefined".into();
        assert!(q.validate(4).is_err());

        let mut q = sample();
        q.options[3] = "15".into();
        assert!(q.validate(4).is_err());

        let mut q = sample();
        q.id.clear();
        assert!(q.validate(4).is_err());

        let mut q = sample();
        q.options[1] = "10.00".into();
        q.options[0] = "11".into();
        assert!(q.validate(4).is_err());
    }

    #[test]
    fn test_is_correct() {
        let q = sample();
        assert!(q.is_correct("12"));
        assert!(q.is_correct(" 12 "));
        assert!(!q.is_correct("12.00"));
        assert!(!q.is_correct("10"));
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["questionText"], "What is 7 + 5?");
        assert_eq!(json["correctAnswer"], "12");
        assert_eq!(json["category"], "arithmetic");
        assert_eq!(json["options"].as_array().map(Vec::len), Some(4));
        assert!(json.get("id").is_some());
    }
}

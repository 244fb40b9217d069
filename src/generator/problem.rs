use super::value::Value;

/// A generated problem before options are synthesized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub text: String,
    pub answer: Value,
    /// Answers of this problem can never be negative (lengths, areas, spread).
    pub non_negative: bool,
    /// Results of plausible wrong reasoning, offered first at the top tier.
    pub mistakes: Vec<Value>,
}

impl Problem {
    pub fn new(text: impl Into<String>, answer: Value) -> Self {
        Self {
            text: text.into(),
            answer,
            non_negative: false,
            mistakes: Vec::new(),
        }
    }

    pub fn non_negative(mut self) -> Self {
        self.non_negative = true;
        self
    }

    pub fn with_mistakes<I>(mut self, mistakes: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        self.mistakes.extend(mistakes);
        self
    }
}

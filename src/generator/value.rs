//! Fixed-point answer values.
//!
//! Answers are kept as integers (whole units or hundredths) until the
//! question is assembled, so equality never depends on float formatting.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    Whole(i64),
    /// Fixed point with two decimals: `Hundredths(1450)` is `14.50`.
    Hundredths(i64),
}

impl Value {
    /// Raw integer in the value's own step.
    pub fn units(self) -> i64 {
        match self {
            Value::Whole(n) | Value::Hundredths(n) => n,
        }
    }

    /// Units per whole number.
    pub fn scale(self) -> i64 {
        match self {
            Value::Whole(_) => 1,
            Value::Hundredths(_) => 100,
        }
    }

    /// Same kind of value with different units.
    pub fn with_units(self, units: i64) -> Value {
        match self {
            Value::Whole(_) => Value::Whole(units),
            Value::Hundredths(_) => Value::Hundredths(units),
        }
    }

    pub fn same_kind(self, other: Value) -> bool {
        self.scale() == other.scale()
    }

    pub fn is_negative(self) -> bool {
        self.units() < 0
    }

    /// Rounds a float to the nearest hundredth.
    pub fn from_f64_hundredths(x: f64) -> Value {
        Value::Hundredths((x * 100.0).round() as i64)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Value::Whole(n) => write!(f, "{}", n),
            Value::Hundredths(n) => {
                let sign = if n < 0 { "-" } else { "" };
                let abs = n.unsigned_abs();
                write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
            }
        }
    }
}

/// Integer division rounding half away from zero.
pub fn div_round(numerator: i64, denominator: i64) -> i64 {
    debug_assert!(denominator != 0);
    let (n, d) = if denominator < 0 {
        (-numerator, -denominator)
    } else {
        (numerator, denominator)
    };
    if n >= 0 {
        (2 * n + d) / (2 * d)
    } else {
        -((-2 * n + d) / (2 * d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Value::Whole(12).to_string(), "12");
        assert_eq!(Value::Whole(-3).to_string(), "-3");
        assert_eq!(Value::Hundredths(1400).to_string(), "14.00");
        assert_eq!(Value::Hundredths(7850).to_string(), "78.50");
        assert_eq!(Value::Hundredths(5).to_string(), "0.05");
        assert_eq!(Value::Hundredths(-141).to_string(), "-1.41");
        assert_eq!(Value::Hundredths(0).to_string(), "0.00");
    }

    #[test]
    fn test_div_round() {
        assert_eq!(div_round(8400, 6), 1400);
        assert_eq!(div_round(1000, 3), 333);
        assert_eq!(div_round(2000, 3), 667);
        assert_eq!(div_round(5, 2), 3);
        assert_eq!(div_round(-5, 2), -3);
        assert_eq!(div_round(7, -2), -4);
    }

    #[test]
    fn test_from_f64_hundredths() {
        assert_eq!(Value::from_f64_hundredths(2.0_f64.sqrt()), Value::Hundredths(141));
        assert_eq!(Value::from_f64_hundredths(8.0), Value::Hundredths(800));
    }

    #[test]
    fn test_units_and_kind() {
        let v = Value::Hundredths(250);
        assert_eq!(v.units(), 250);
        assert_eq!(v.scale(), 100);
        assert_eq!(v.with_units(300), Value::Hundredths(300));
        assert!(!v.same_kind(Value::Whole(2)));
    }
}

//! Literal validator

use std::fmt;

use super::{Modifiers, Presence, Validator};
use crate::error::ErrorKind;
use crate::validation::{Validation, ValidationResult};
use crate::value::Value;

/// An exact scalar value to match.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Text
    Str(String),
    /// Number
    Number(f64),
    /// Flag
    Bool(bool),
}

impl Literal {
    /// Strict, type-exact equality. `42` never equals `"42"`.
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (Literal::Str(expected), Value::String(actual)) => expected == actual,
            (Literal::Number(expected), Value::Number(actual)) => expected == actual,
            (Literal::Bool(expected), Value::Bool(actual)) => expected == actual,
            _ => false,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Str(s) => write!(f, "{:?}", s),
            Literal::Number(n) => write!(f, "{}", n),
            Literal::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<Literal> for Value {
    fn from(literal: Literal) -> Self {
        match literal {
            Literal::Str(s) => Value::String(s),
            Literal::Number(n) => Value::Number(n),
            Literal::Bool(b) => Value::Bool(b),
        }
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::Str(s.to_string())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::Str(s)
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Literal::Bool(b)
    }
}

macro_rules! impl_literal_number {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Literal {
                fn from(n: $t) -> Self {
                    Literal::Number(n as f64)
                }
            }
        )+
    };
}

impl_literal_number!(f64, f32, i32, i64, u32, u64);

/// Succeeds only for a value strictly equal to one literal.
///
/// ```
/// use sluice::{ErrorKind, Schema, Validator, Value};
///
/// let answer = Schema::literal(42);
/// assert!(answer.validate(&Value::from(42)).is_success());
/// assert_eq!(
///     answer.validate(&Value::from("42")).error_codes(),
///     vec![ErrorKind::LiteralMismatch]
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralValidator {
    modifiers: Modifiers,
    expected: Literal,
}

impl_modifiers!(LiteralValidator);

impl LiteralValidator {
    /// Match `expected` exactly.
    pub fn new(expected: impl Into<Literal>) -> Self {
        LiteralValidator {
            modifiers: Modifiers::default(),
            expected: expected.into(),
        }
    }

    /// The literal this validator accepts.
    pub fn expected(&self) -> &Literal {
        &self.expected
    }
}

impl Validator for LiteralValidator {
    type Output = Literal;

    fn validate_at(&self, value: Option<&Value>, path: &str) -> ValidationResult<Literal> {
        let value = match self.modifiers.presence(value, path) {
            Presence::Present(value) => value,
            Presence::Settled(result) => return result,
        };

        if self.expected.matches(value) {
            Validation::Success(Some(self.expected.clone()))
        } else {
            Validation::reject(self.modifiers.error(
                path,
                ErrorKind::LiteralMismatch,
                format!("Expected literal value {}", self.expected),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_literal() {
        let validator = LiteralValidator::new("active");
        let result = validator.validate(&Value::from("active"));
        assert_eq!(result.data(), Some(&Literal::Str("active".to_string())));

        let result = validator.validate(&Value::from("inactive"));
        assert_eq!(result.error_codes(), vec![ErrorKind::LiteralMismatch]);
        assert_eq!(result.errors()[0].message, "Expected literal value \"active\"");
    }

    #[test]
    fn test_number_literal_does_not_coerce() {
        let validator = LiteralValidator::new(42);
        assert!(validator.validate(&Value::from(42.0)).is_success());
        let result = validator.validate(&Value::from("42"));
        assert_eq!(result.errors()[0].message, "Expected literal value 42");
    }

    #[test]
    fn test_bool_literal() {
        let validator = LiteralValidator::new(true);
        assert!(validator.validate(&Value::from(true)).is_success());
        assert!(validator.validate(&Value::from(false)).is_failure());
        assert!(validator.validate(&Value::from(1)).is_failure());
    }

    #[test]
    fn test_nan_literal_never_matches() {
        let validator = LiteralValidator::new(f64::NAN);
        assert!(validator.validate(&Value::Number(f64::NAN)).is_failure());
    }

    #[test]
    fn test_literal_into_value() {
        assert_eq!(Value::from(Literal::from("x")), Value::from("x"));
        assert_eq!(Value::from(Literal::from(false)), Value::from(false));
    }
}

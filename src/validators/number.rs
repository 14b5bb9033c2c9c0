//! Number validator

use super::{Modifiers, Presence, Validator};
use crate::error::ErrorKind;
use crate::validation::{Validation, ValidationResult};
use crate::value::Value;

/// Validates numbers against bounds and integrality.
///
/// NaN is not considered a number. Bounds are inclusive and every failing
/// check is reported.
///
/// # Example
///
/// ```
/// use sluice::{ErrorKind, Schema, Validator, Value};
///
/// let age = Schema::number().int().min(0.0).max(150.0);
/// assert!(age.validate(&Value::from(42)).is_success());
/// assert_eq!(
///     age.validate(&Value::from(-1.5)).error_codes(),
///     vec![ErrorKind::MinValue, ErrorKind::NotInteger]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberValidator {
    modifiers: Modifiers,
    min: Option<f64>,
    max: Option<f64>,
    integer: bool,
}

impl_modifiers!(NumberValidator);

impl NumberValidator {
    /// A number validator with no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `value >= min`.
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Require `value <= max`.
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Require a whole number.
    pub fn int(mut self) -> Self {
        self.integer = true;
        self
    }

    /// Shorthand for `min(0.0)`.
    pub fn positive(self) -> Self {
        self.min(0.0)
    }

    /// Shorthand for `max(0.0)`.
    pub fn negative(self) -> Self {
        self.max(0.0)
    }
}

impl Validator for NumberValidator {
    type Output = f64;

    fn validate_at(&self, value: Option<&Value>, path: &str) -> ValidationResult<f64> {
        let value = match self.modifiers.presence(value, path) {
            Presence::Present(value) => value,
            Presence::Settled(result) => return result,
        };
        let number = match value {
            Value::Number(n) if n.is_nan() => {
                return Validation::reject(self.modifiers.error(
                    path,
                    ErrorKind::InvalidType,
                    "Expected number, received NaN",
                ));
            }
            Value::Number(n) => *n,
            other => return Validation::reject(self.modifiers.type_error(path, "number", other)),
        };

        let mut errors = Vec::new();

        if let Some(min) = self.min {
            if number < min {
                errors.push(self.modifiers.error(
                    path,
                    ErrorKind::MinValue,
                    format!("Number must be greater than or equal to {}", min),
                ));
            }
        }

        if let Some(max) = self.max {
            if number > max {
                errors.push(self.modifiers.error(
                    path,
                    ErrorKind::MaxValue,
                    format!("Number must be less than or equal to {}", max),
                ));
            }
        }

        if self.integer && !(number.is_finite() && number.fract() == 0.0) {
            errors.push(self.modifiers.error(
                path,
                ErrorKind::NotInteger,
                "Number must be an integer",
            ));
        }

        Validation::settle(number, errors)
    }
}

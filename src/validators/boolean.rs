//! Boolean validator

use super::{Modifiers, Presence, Validator};
use crate::validation::{Validation, ValidationResult};
use crate::value::Value;

/// Accepts `true` and `false` only. Strings such as `"true"` and numbers are
/// rejected with `INVALID_TYPE`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BooleanValidator {
    modifiers: Modifiers,
}

impl_modifiers!(BooleanValidator);

impl BooleanValidator {
    /// A boolean validator.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Validator for BooleanValidator {
    type Output = bool;

    fn validate_at(&self, value: Option<&Value>, path: &str) -> ValidationResult<bool> {
        match self.modifiers.presence(value, path) {
            Presence::Present(Value::Bool(flag)) => Validation::Success(Some(*flag)),
            Presence::Present(other) => {
                Validation::reject(self.modifiers.type_error(path, "boolean", other))
            }
            Presence::Settled(result) => result,
        }
    }
}

//! Validator contract and the concrete validators
//!
//! Every validator implements [`Validator`]: given an optional [`Value`] and
//! the path it sits at, it returns a [`ValidationResult`]. Before any
//! type-specific logic runs, each validator applies the same presence rules:
//!
//! - absent or null and `optional()` → success with no data
//! - absent or null otherwise → one `REQUIRED` error at the path
//!
//! Validators are configured by chaining calls that consume and return the
//! validator, and are read-only afterwards, so one tree can be shared freely
//! between threads.
//!
//! Heterogeneous children (object fields, union alternatives) are held as
//! [`BoxedValidator`], an `Arc<dyn DynValidator>` whose output is a [`Value`].
//!
//! # Example
//!
//! ```
//! use sluice::{Schema, Validator, Value};
//!
//! let name = Schema::string().min_length(2).optional();
//! assert!(name.validate_missing().is_success());
//! assert!(name.validate(&Value::Null).is_success());
//! assert!(name.validate(&Value::from("A")).is_failure());
//! ```

use std::fmt;
use std::sync::Arc;

use crate::error::{ErrorKind, ValidationError};
use crate::validation::{Validation, ValidationResult};
use crate::value::Value;

/// Adds `optional`, `with_message` and `is_optional` to a validator that
/// keeps its settings in a `modifiers` field.
macro_rules! impl_modifiers {
    ($ty:ident $(<$($g:ident),+>)?) => {
        impl $(<$($g),+>)? $ty $(<$($g),+>)? {
            /// Accept absent and null values, succeeding with no data.
            pub fn optional(mut self) -> Self {
                self.modifiers.optional = true;
                self
            }

            /// Use `message` for every error this validator reports.
            pub fn with_message(mut self, message: impl Into<String>) -> Self {
                self.modifiers.message = Some(message.into());
                self
            }

            /// Whether absent and null values are accepted.
            pub fn is_optional(&self) -> bool {
                self.modifiers.optional
            }
        }
    };
}

mod array;
mod boolean;
mod currency;
mod date;
mod literal;
mod number;
mod object;
mod string;
mod union;

pub use array::ArrayValidator;
pub use boolean::BooleanValidator;
pub use currency::{CurrencyValidator, CurrencyValue};
pub use date::DateValidator;
pub use literal::{Literal, LiteralValidator};
pub use number::NumberValidator;
pub use object::ObjectValidator;
pub use string::StringValidator;
pub use union::UnionValidator;

/// Message used for every `REQUIRED` error unless overridden.
pub const REQUIRED_MESSAGE: &str = "Value is required";

/// A validator producing typed output.
pub trait Validator: fmt::Debug + Send + Sync {
    /// The validated value type
    type Output: Into<Value> + Clone + fmt::Debug + PartialEq;

    /// Validate `value` located at `path`. `None` means the value is absent.
    fn validate_at(&self, value: Option<&Value>, path: &str) -> ValidationResult<Self::Output>;

    /// Validate a present value at the root.
    fn validate(&self, value: &Value) -> ValidationResult<Self::Output> {
        self.validate_at(Some(value), "")
    }

    /// Validate an absent value at the root.
    fn validate_missing(&self) -> ValidationResult<Self::Output> {
        self.validate_at(None, "")
    }

    /// Convert a JSON document and validate it at the root.
    ///
    /// ```
    /// use sluice::{Schema, Validator};
    /// use serde_json::json;
    ///
    /// let result = Schema::number().int().validate_json(&json!(3));
    /// assert_eq!(result.data(), Some(&3.0));
    /// ```
    fn validate_json(&self, json: &serde_json::Value) -> ValidationResult<Self::Output> {
        self.validate(&Value::from(json))
    }

    /// Erase the output type so the validator can sit beside others.
    fn boxed(self) -> BoxedValidator
    where
        Self: Sized + 'static,
    {
        Arc::new(self)
    }
}

/// Object-safe form of [`Validator`], producing [`Value`] output.
///
/// Implemented for every `Validator`; there is no need to implement it by hand.
pub trait DynValidator: fmt::Debug + Send + Sync {
    /// Validate and convert the output to a [`Value`].
    fn validate_value(&self, value: Option<&Value>, path: &str) -> ValidationResult<Value>;
}

impl<V: Validator> DynValidator for V {
    fn validate_value(&self, value: Option<&Value>, path: &str) -> ValidationResult<Value> {
        self.validate_at(value, path).map(|data| data.map(Into::into))
    }
}

/// A shared, type-erased validator.
pub type BoxedValidator = Arc<dyn DynValidator>;

impl Validator for BoxedValidator {
    type Output = Value;

    fn validate_at(&self, value: Option<&Value>, path: &str) -> ValidationResult<Value> {
        (**self).validate_value(value, path)
    }
}

/// Settings shared by every validator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Modifiers {
    pub(crate) optional: bool,
    pub(crate) message: Option<String>,
}

/// Outcome of the presence check that opens every `validate_at`.
pub(crate) enum Presence<'v, T> {
    /// A non-null value to run type-specific checks on
    Present(&'v Value),
    /// Validation is already decided
    Settled(ValidationResult<T>),
}

impl Modifiers {
    /// Build an error, preferring the custom message over `default`.
    pub(crate) fn error(
        &self,
        path: &str,
        code: ErrorKind,
        default: impl Into<String>,
    ) -> ValidationError {
        let message = match &self.message {
            Some(custom) => custom.clone(),
            None => default.into(),
        };
        ValidationError::new(path, code, message)
    }

    /// `INVALID_TYPE` naming what was expected and what arrived.
    pub(crate) fn type_error(&self, path: &str, expected: &str, got: &Value) -> ValidationError {
        self.error(
            path,
            ErrorKind::InvalidType,
            format!("Expected {}, received {}", expected, got.type_name()),
        )
    }

    pub(crate) fn presence<'v, T>(&self, value: Option<&'v Value>, path: &str) -> Presence<'v, T> {
        match value {
            Some(v) if !v.is_null() => Presence::Present(v),
            _ if self.optional => Presence::Settled(Validation::Success(None)),
            _ => Presence::Settled(Validation::reject(self.error(
                path,
                ErrorKind::Required,
                REQUIRED_MESSAGE,
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence_required() {
        let modifiers = Modifiers::default();
        match modifiers.presence::<()>(None, "user.name") {
            Presence::Settled(result) => {
                assert_eq!(
                    result.errors(),
                    &[ValidationError::new(
                        "user.name",
                        ErrorKind::Required,
                        REQUIRED_MESSAGE
                    )]
                );
            }
            Presence::Present(_) => panic!("absent value reported as present"),
        }
    }

    #[test]
    fn test_presence_null_counts_as_absent() {
        let modifiers = Modifiers {
            optional: true,
            message: None,
        };
        match modifiers.presence::<()>(Some(&Value::Null), "") {
            Presence::Settled(result) => assert_eq!(result, Validation::Success(None)),
            Presence::Present(_) => panic!("null reported as present"),
        }
    }

    #[test]
    fn test_custom_message_overrides_default() {
        let modifiers = Modifiers {
            optional: false,
            message: Some("Please fill this in".to_string()),
        };
        let err = modifiers.error("", ErrorKind::Required, REQUIRED_MESSAGE);
        assert_eq!(err.message, "Please fill this in");
        assert_eq!(err.code, ErrorKind::Required);
    }

    #[test]
    fn test_type_error_names_received_type() {
        let err = Modifiers::default().type_error("age", "number", &Value::from("ten"));
        assert_eq!(err.message, "Expected number, received string");
        assert_eq!(err.path, "age");
    }
}

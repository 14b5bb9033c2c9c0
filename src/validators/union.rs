//! Union validator

use super::{BoxedValidator, DynValidator, Modifiers, Presence, Validator};
use crate::error::{ErrorKind, ValidationError};
use crate::validation::{Validation, ValidationResult};
use crate::value::Value;

/// Accepts a value when any alternative does.
///
/// Alternatives are tried in declaration order and the first success is
/// returned unchanged. When none match, a single `UNION_MISMATCH` error is
/// reported; [`alternative_errors`](Self::alternative_errors) recovers what
/// each alternative objected to.
///
/// # Example
///
/// ```
/// use sluice::{Schema, Validator, Value};
///
/// let id = Schema::union([Schema::number().int().boxed(), Schema::string().boxed()]);
/// assert!(id.validate(&Value::from(7)).is_success());
/// assert!(id.validate(&Value::from("a7")).is_success());
/// assert!(id.validate(&Value::from(true)).is_failure());
/// ```
#[derive(Debug, Clone, Default)]
pub struct UnionValidator {
    modifiers: Modifiers,
    alternatives: Vec<BoxedValidator>,
}

impl_modifiers!(UnionValidator);

impl UnionValidator {
    /// A union over `alternatives`, tried in order.
    pub fn new(alternatives: impl IntoIterator<Item = BoxedValidator>) -> Self {
        UnionValidator {
            modifiers: Modifiers::default(),
            alternatives: alternatives.into_iter().collect(),
        }
    }

    /// Append another alternative.
    pub fn or(mut self, alternative: impl Validator + 'static) -> Self {
        self.alternatives.push(alternative.boxed());
        self
    }

    /// Number of alternatives.
    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    /// Whether there are no alternatives. An empty union accepts nothing.
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    /// Each alternative's errors for `value`, in declaration order. An
    /// alternative that accepts the value contributes an empty list.
    ///
    /// ```
    /// use sluice::{ErrorKind, Schema, Validator, Value};
    ///
    /// let flag = Schema::union([Schema::boolean().boxed(), Schema::literal("yes").boxed()]);
    /// let detail = flag.alternative_errors(&Value::from("no"), "");
    /// assert_eq!(detail[0][0].code, ErrorKind::InvalidType);
    /// assert_eq!(detail[1][0].code, ErrorKind::LiteralMismatch);
    /// ```
    pub fn alternative_errors(&self, value: &Value, path: &str) -> Vec<Vec<ValidationError>> {
        self.alternatives
            .iter()
            .map(|alternative| alternative.validate_value(Some(value), path).into_errors())
            .collect()
    }
}

impl Validator for UnionValidator {
    type Output = Value;

    fn validate_at(&self, value: Option<&Value>, path: &str) -> ValidationResult<Value> {
        let value = match self.modifiers.presence(value, path) {
            Presence::Present(value) => value,
            Presence::Settled(result) => return result,
        };

        for (_index, alternative) in self.alternatives.iter().enumerate() {
            let result = alternative.validate_value(Some(value), path);
            if result.is_success() {
                #[cfg(feature = "tracing")]
                tracing::debug!(path, alternative = _index, "union alternative matched");
                return result;
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            path,
            alternatives = self.alternatives.len(),
            "no union alternative matched"
        );

        Validation::reject(self.modifiers.error(
            path,
            ErrorKind::UnionMismatch,
            "Value does not match any of the union alternatives",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{CurrencyValidator, LiteralValidator, NumberValidator, StringValidator};

    fn status() -> UnionValidator {
        UnionValidator::new([
            LiteralValidator::new("active").boxed(),
            StringValidator::new().min_length(3).boxed(),
        ])
    }

    #[test]
    fn test_first_match_wins() {
        let result = status().validate(&Value::from("active"));
        assert_eq!(result.data(), Some(&Value::from("active")));
    }

    #[test]
    fn test_earlier_alternative_shapes_the_output() {
        let money_first = UnionValidator::new([
            CurrencyValidator::new().usd().boxed(),
            StringValidator::new().boxed(),
        ]);
        let result = money_first.validate(&Value::from("$5"));
        let data = result.data().expect("currency alternative matches");
        assert_eq!(data.get("amount"), Some(&Value::Number(5.0)));
        assert_eq!(data.get("currency"), Some(&Value::from("$")));

        let text_first = UnionValidator::new([
            StringValidator::new().boxed(),
            CurrencyValidator::new().usd().boxed(),
        ]);
        let result = text_first.validate(&Value::from("$5"));
        assert_eq!(result.data(), Some(&Value::from("$5")));
    }

    #[test]
    fn test_later_alternative_matches() {
        let result = status().validate(&Value::from("paused"));
        assert_eq!(result.data(), Some(&Value::from("paused")));
    }

    #[test]
    fn test_total_failure_is_one_error() {
        let result = status().validate_at(Some(&Value::from(1)), "status");
        assert_eq!(result.error_codes(), vec![ErrorKind::UnionMismatch]);
        assert_eq!(result.errors()[0].path, "status");
        assert_eq!(
            result.errors()[0].message,
            "Value does not match any of the union alternatives"
        );
    }

    #[test]
    fn test_alternative_errors_are_index_aligned() {
        let detail = status().alternative_errors(&Value::from("ab"), "s");
        assert_eq!(detail.len(), 2);
        assert_eq!(detail[0][0].code, ErrorKind::LiteralMismatch);
        assert_eq!(detail[1][0].code, ErrorKind::MinLength);
        assert_eq!(detail[1][0].path, "s");

        let detail = status().alternative_errors(&Value::from("active"), "");
        assert!(detail[0].is_empty());
    }

    #[test]
    fn test_or_appends() {
        let union = status().or(NumberValidator::new());
        assert_eq!(union.len(), 3);
        assert!(union.validate(&Value::from(5)).is_success());
    }

    #[test]
    fn test_empty_union_rejects() {
        let union = UnionValidator::default();
        assert!(union.is_empty());
        assert!(union.validate(&Value::from(1)).is_failure());
    }

    #[test]
    fn test_required_before_alternatives() {
        let union = status();
        assert_eq!(union.validate_missing().error_codes(), vec![ErrorKind::Required]);
        assert!(union.optional().validate(&Value::Null).is_success());
    }

    #[cfg(feature = "tracing")]
    mod tracing_events {
        use super::*;
        use tracing_test::traced_test;

        #[traced_test]
        #[test]
        fn test_logs_matching_alternative() {
            let _ = status().validate(&Value::from("paused"));
            assert!(logs_contain("union alternative matched"));
            assert!(logs_contain("alternative=1"));
        }

        #[traced_test]
        #[test]
        fn test_logs_total_mismatch() {
            let _ = status().validate(&Value::from(false));
            assert!(logs_contain("no union alternative matched"));
        }
    }
}

//! Array validator

use super::{Modifiers, Presence, Validator};
use crate::error::ErrorKind;
use crate::path::join_index;
use crate::validation::{Validation, ValidationResult};
use crate::value::Value;

/// Validates every element of an array against one item validator.
///
/// Length errors and element errors are all reported together. Element
/// errors carry the element's index in their path (`tags[2]`). Elements that
/// an optional item validator accepts as absent are left out of the output.
///
/// # Example
///
/// ```
/// use sluice::{Schema, Validator, Value};
///
/// let tags = Schema::array(Schema::string().min_length(2)).max_length(3);
/// let input = Value::from(vec!["ok", "x", "fine"]);
/// let result = tags.validate(&input);
/// assert_eq!(result.errors()[0].path, "[1]");
/// ```
#[derive(Debug, Clone)]
pub struct ArrayValidator<V> {
    modifiers: Modifiers,
    item: V,
    min_length: Option<usize>,
    max_length: Option<usize>,
}

impl_modifiers!(ArrayValidator<V>);

impl<V> ArrayValidator<V> {
    /// An array whose elements must satisfy `item`.
    pub fn new(item: V) -> Self {
        ArrayValidator {
            modifiers: Modifiers::default(),
            item,
            min_length: None,
            max_length: None,
        }
    }

    /// Require at least `n` elements.
    pub fn min_length(mut self, n: usize) -> Self {
        self.min_length = Some(n);
        self
    }

    /// Allow at most `n` elements.
    pub fn max_length(mut self, n: usize) -> Self {
        self.max_length = Some(n);
        self
    }

    /// Shorthand for `min_length(1)`.
    pub fn non_empty(self) -> Self {
        self.min_length(1)
    }

    /// The item validator.
    pub fn item(&self) -> &V {
        &self.item
    }
}

impl<V: Validator> Validator for ArrayValidator<V> {
    type Output = Vec<V::Output>;

    fn validate_at(&self, value: Option<&Value>, path: &str) -> ValidationResult<Vec<V::Output>> {
        let value = match self.modifiers.presence(value, path) {
            Presence::Present(value) => value,
            Presence::Settled(result) => return result,
        };
        let Value::Array(items) = value else {
            return Validation::reject(self.modifiers.type_error(path, "array", value));
        };

        let mut length_errors = Vec::new();

        if let Some(min) = self.min_length {
            if items.len() < min {
                length_errors.push(self.modifiers.error(
                    path,
                    ErrorKind::MinLength,
                    format!("Array must contain at least {} item(s)", min),
                ));
            }
        }

        if let Some(max) = self.max_length {
            if items.len() > max {
                length_errors.push(self.modifiers.error(
                    path,
                    ErrorKind::MaxLength,
                    format!("Array must contain at most {} item(s)", max),
                ));
            }
        }

        let elements = Validation::all_vec(
            items
                .iter()
                .enumerate()
                .map(|(index, item)| self.item.validate_at(Some(item), &join_index(path, index))),
        );

        let result: ValidationResult<Vec<V::Output>> = Validation::settle((), length_errors)
            .and(elements)
            .map(|(_, elements)| Some(elements.into_iter().flatten().collect()));

        #[cfg(feature = "tracing")]
        tracing::trace!(
            path,
            len = items.len(),
            errors = result.errors().len(),
            "array validated"
        );

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{NumberValidator, StringValidator};

    fn numbers(values: &[f64]) -> Value {
        Value::from(values.to_vec())
    }

    #[test]
    fn test_validates_every_element() {
        let validator = ArrayValidator::new(NumberValidator::new().min(0.0));
        let result = validator.validate(&numbers(&[1.0, -1.0, 2.0, -2.0]));
        let paths: Vec<_> = result.errors().iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["[1]", "[3]"]);
    }

    #[test]
    fn test_output_keeps_order() {
        let validator = ArrayValidator::new(NumberValidator::new());
        let result = validator.validate(&numbers(&[3.0, 1.0, 2.0]));
        assert_eq!(result.into_data(), Some(vec![3.0, 1.0, 2.0]));
    }

    #[test]
    fn test_absent_elements_are_skipped() {
        let validator = ArrayValidator::new(StringValidator::new().optional());
        let input = Value::Array(vec![Value::from("a"), Value::Null, Value::from("b")]);
        let result = validator.validate(&input);
        assert_eq!(
            result.into_data(),
            Some(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_rejects_non_array() {
        let validator = ArrayValidator::new(NumberValidator::new());
        let result = validator.validate(&Value::from("1,2,3"));
        assert_eq!(result.error_codes(), vec![ErrorKind::InvalidType]);
        assert_eq!(result.errors()[0].message, "Expected array, received string");
    }

    #[test]
    fn test_length_and_element_errors_accumulate() {
        let validator = ArrayValidator::new(NumberValidator::new().int()).min_length(3);
        let result = validator.validate(&numbers(&[1.5]));
        assert_eq!(
            result.error_codes(),
            vec![ErrorKind::MinLength, ErrorKind::NotInteger]
        );
        assert_eq!(result.errors()[0].path, "");
        assert_eq!(result.errors()[1].path, "[0]");
    }

    #[test]
    fn test_non_empty() {
        let validator = ArrayValidator::new(NumberValidator::new()).non_empty();
        let result = validator.validate(&Value::Array(vec![]));
        assert_eq!(result.error_codes(), vec![ErrorKind::MinLength]);
        assert_eq!(
            result.errors()[0].message,
            "Array must contain at least 1 item(s)"
        );
    }

    #[test]
    fn test_max_length() {
        let validator = ArrayValidator::new(NumberValidator::new()).max_length(2);
        assert!(validator.validate(&numbers(&[1.0, 2.0])).is_success());
        assert_eq!(
            validator.validate(&numbers(&[1.0, 2.0, 3.0])).error_codes(),
            vec![ErrorKind::MaxLength]
        );
    }

    #[test]
    fn test_nested_paths() {
        let validator = ArrayValidator::new(ArrayValidator::new(NumberValidator::new()));
        let input = Value::Array(vec![numbers(&[1.0]), Value::Array(vec![Value::from("x")])]);
        let result = validator.validate_at(Some(&input), "matrix");
        assert_eq!(result.errors()[0].path, "matrix[1][0]");
    }
}

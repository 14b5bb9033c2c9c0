//! Validation type for accumulating errors
//!
//! [`Validation`] is like `Result` but built for validation, where every failing
//! check should be reported rather than only the first one. Every validator in
//! this crate returns a [`ValidationResult`], which is a `Validation` whose
//! success carries optional data (absent when an optional value was missing)
//! and whose failure carries the full list of [`ValidationError`]s.
//!
//! # Examples
//!
//! ## Accumulating errors
//!
//! ```
//! use sluice::Validation;
//!
//! let v1 = Validation::<i32, _>::failure(vec!["error1"]);
//! let v2 = Validation::<i32, _>::failure(vec!["error2"]);
//! let result = v1.and(v2);
//!
//! assert_eq!(result, Validation::Failure(vec!["error1", "error2"]));
//! ```
//!
//! ## Reading a validator's result
//!
//! ```
//! use sluice::{ErrorKind, Schema, Validator, Value};
//!
//! let result = Schema::string().min_length(3).validate(&Value::from("ab"));
//! assert!(result.is_failure());
//! assert_eq!(result.error_codes(), vec![ErrorKind::MinLength]);
//! assert_eq!(result.data(), None);
//! ```

use crate::error::{ErrorKind, ValidationError};
use crate::path;
use crate::Semigroup;

/// A validation that either succeeds with a value or fails with accumulated errors
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the error value (must implement `Semigroup` for accumulation)
///
/// # Examples
///
/// ```
/// use sluice::Validation;
///
/// let v = Validation::<_, Vec<&str>>::success(42);
/// assert_eq!(v.into_result(), Ok(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with accumulated errors
    Failure(E),
}

/// Outcome of running a validator.
///
/// `Success(Some(data))` carries the validated (possibly coerced) value,
/// `Success(None)` means an optional value was absent, and `Failure(errors)`
/// always holds at least one error.
pub type ValidationResult<T> = Validation<Option<T>, Vec<ValidationError>>;

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Create a validation from a Result
    ///
    /// ```
    /// use sluice::Validation;
    ///
    /// let v = Validation::from_result(Err::<i32, _>("error".to_string()));
    /// assert_eq!(v, Validation::Failure("error".to_string()));
    /// ```
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Validation::Success(value),
            Err(error) => Validation::Failure(error),
        }
    }

    /// Convert this validation to a Result
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Check if this validation is successful
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Check if this validation failed
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// Transform the success value if present
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transform the error value if present
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Validation<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(f(error)),
        }
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Combine two validations, accumulating errors using the Semigroup instance
    ///
    /// ```
    /// use sluice::Validation;
    ///
    /// let v1 = Validation::<_, Vec<&str>>::success(1);
    /// let v2 = Validation::<_, Vec<&str>>::success(2);
    /// assert_eq!(v1.and(v2), Validation::Success((1, 2)));
    /// ```
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
            (Validation::Failure(e), _) => Validation::Failure(e),
            (_, Validation::Failure(e)) => Validation::Failure(e),
        }
    }

    /// Chain a dependent validation. `f` only runs on success.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        match self {
            Validation::Success(value) => f(value),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Combine all validations, keeping successes in order or merging every failure
    ///
    /// ```
    /// use sluice::Validation;
    ///
    /// let validations = vec![
    ///     Validation::<_, Vec<&str>>::success(1),
    ///     Validation::failure(vec!["error1"]),
    ///     Validation::failure(vec!["error2"]),
    /// ];
    /// assert_eq!(
    ///     Validation::all_vec(validations),
    ///     Validation::Failure(vec!["error1", "error2"])
    /// );
    /// ```
    pub fn all_vec<I>(validations: I) -> Validation<Vec<T>, E>
    where
        I: IntoIterator<Item = Validation<T, E>>,
    {
        let mut successes = Vec::new();
        let mut failure: Option<E> = None;

        for validation in validations {
            match validation {
                Validation::Success(value) => successes.push(value),
                Validation::Failure(error) => {
                    failure = Some(match failure {
                        Some(acc) => acc.combine(error),
                        None => error,
                    });
                }
            }
        }

        match failure {
            Some(error) => Validation::Failure(error),
            None => Validation::Success(successes),
        }
    }
}

impl<T> Validation<Option<T>, Vec<ValidationError>> {
    /// Success when `errors` is empty, otherwise a failure carrying them.
    pub(crate) fn settle(data: T, errors: Vec<ValidationError>) -> Self {
        if errors.is_empty() {
            Validation::Success(Some(data))
        } else {
            Validation::Failure(errors)
        }
    }

    /// A failure holding exactly one error.
    pub(crate) fn reject(error: ValidationError) -> Self {
        Validation::Failure(vec![error])
    }

    /// The validated data, if validation succeeded and a value was present.
    pub fn data(&self) -> Option<&T> {
        match self {
            Validation::Success(data) => data.as_ref(),
            Validation::Failure(_) => None,
        }
    }

    /// Consume the result, returning the validated data if any.
    pub fn into_data(self) -> Option<T> {
        match self {
            Validation::Success(data) => data,
            Validation::Failure(_) => None,
        }
    }

    /// All errors in the order they were found. Empty on success.
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            Validation::Success(_) => &[],
            Validation::Failure(errors) => errors,
        }
    }

    /// Consume the result, returning its errors.
    pub fn into_errors(self) -> Vec<ValidationError> {
        match self {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors,
        }
    }

    /// The error codes in order, convenient for assertions.
    pub fn error_codes(&self) -> Vec<ErrorKind> {
        self.errors().iter().map(|e| e.code).collect()
    }

    /// Errors reported exactly at `path`.
    ///
    /// ```
    /// use sluice::{Schema, Validator, Value};
    /// use serde_json::json;
    ///
    /// let schema = Schema::object()
    ///     .field("name", Schema::string())
    ///     .field("age", Schema::number());
    /// let result = schema.validate_json(&json!({"age": "old"}));
    ///
    /// assert_eq!(result.errors_at("age").count(), 1);
    /// assert_eq!(result.errors_at("missing").count(), 0);
    /// ```
    pub fn errors_at<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a ValidationError> + 'a {
        self.errors().iter().filter(move |e| e.path == path)
    }

    /// Errors reported at `path` or anywhere beneath it.
    pub fn errors_within<'a>(
        &'a self,
        ancestor: &'a str,
    ) -> impl Iterator<Item = &'a ValidationError> + 'a {
        self.errors()
            .iter()
            .filter(move |e| path::is_within(&e.path, ancestor))
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize, E: serde::Serialize> serde::Serialize for Validation<T, E> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Validation", 3)?;
        match self {
            Validation::Success(data) => {
                state.serialize_field("success", &true)?;
                state.serialize_field("data", data)?;
                state.serialize_field("errors", &Vec::<()>::new())?;
            }
            Validation::Failure(errors) => {
                state.serialize_field("success", &false)?;
                state.serialize_field("data", &None::<()>)?;
                state.serialize_field("errors", errors)?;
            }
        }
        state.end()
    }
}

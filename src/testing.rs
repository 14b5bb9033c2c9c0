//! Testing utilities
//!
//! Assertion macros for [`ValidationResult`](crate::ValidationResult)s and,
//! behind the `proptest` feature, an [`Arbitrary`](proptest::arbitrary::Arbitrary)
//! implementation for [`Value`](crate::Value) that generates nested inputs.
//!
//! # Examples
//!
//! ```rust
//! use sluice::{assert_error_codes, assert_failure, assert_success};
//! use sluice::{ErrorKind, Schema, Validator, Value};
//!
//! let age = Schema::number().int().min(0.0);
//! assert_success!(age.validate(&Value::from(30)));
//! assert_failure!(age.validate(&Value::from("thirty")));
//! assert_error_codes!(age.validate(&Value::from(-0.5)), [ErrorKind::MinValue, ErrorKind::NotInteger]);
//! ```

/// Assert that a validation succeeds.
///
/// This macro will panic if the validation is a `Failure`.
///
/// # Example
///
/// ```rust
/// use sluice::{assert_success, Schema, Validator, Value};
///
/// assert_success!(Schema::boolean().validate(&Value::from(true)));
/// ```
#[macro_export]
macro_rules! assert_success {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Success(_) => {}
            $crate::Validation::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that a validation fails.
///
/// This macro will panic if the validation is a `Success`.
///
/// # Example
///
/// ```rust
/// use sluice::{assert_failure, Schema, Validator, Value};
///
/// assert_failure!(Schema::boolean().validate(&Value::from("true")));
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Failure(_) => {}
            $crate::Validation::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that a validation fails with exactly these error codes, in order.
///
/// # Example
///
/// ```rust
/// use sluice::{assert_error_codes, ErrorKind, Schema, Validator};
///
/// let name = Schema::string().min_length(2);
/// assert_error_codes!(name.validate_missing(), [ErrorKind::Required]);
/// ```
#[macro_export]
macro_rules! assert_error_codes {
    ($validation:expr, [$($code:expr),* $(,)?]) => {
        match $validation {
            $crate::Validation::Failure(errors) => {
                let codes: ::std::vec::Vec<$crate::ErrorKind> =
                    errors.iter().map(|e| e.code).collect();
                let expected: ::std::vec::Vec<$crate::ErrorKind> = ::std::vec![$($code),*];
                assert_eq!(codes, expected, "errors: {:?}", errors);
            }
            $crate::Validation::Success(v) => {
                panic!(
                    "Expected Failure with codes {:?}, got Success: {:?}",
                    [$($code),*], v
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
mod arbitrary {
    use chrono::DateTime;
    use proptest::prelude::*;

    use crate::error::ErrorKind;
    use crate::value::Value;

    const ALL_KINDS: [ErrorKind; 19] = [
        ErrorKind::Required,
        ErrorKind::InvalidType,
        ErrorKind::MinLength,
        ErrorKind::MaxLength,
        ErrorKind::MinValue,
        ErrorKind::MaxValue,
        ErrorKind::PatternMismatch,
        ErrorKind::InvalidDate,
        ErrorKind::InvalidDateFormat,
        ErrorKind::MinDate,
        ErrorKind::MaxDate,
        ErrorKind::NotInteger,
        ErrorKind::UnionMismatch,
        ErrorKind::LiteralMismatch,
        ErrorKind::MissingFormat,
        ErrorKind::InvalidCurrencyFormat,
        ErrorKind::NegativeAmount,
        ErrorKind::MinAmount,
        ErrorKind::MaxAmount,
    ];

    impl Arbitrary for ErrorKind {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            proptest::sample::select(ALL_KINDS.to_vec()).boxed()
        }
    }

    fn scalar() -> BoxedStrategy<Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            (-1.0e9..1.0e9f64).prop_map(Value::Number),
            any::<i32>().prop_map(Value::from),
            "[a-zA-Z0-9 @.$€£₽,/-]{0,16}".prop_map(Value::String),
            (-2_000_000_000_000i64..4_000_000_000_000i64)
                .prop_filter_map("timestamp in range", DateTime::from_timestamp_millis)
                .prop_map(Value::Date),
        ]
        .boxed()
    }

    impl Arbitrary for Value {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            scalar()
                .prop_recursive(3, 32, 4, |inner| {
                    prop_oneof![
                        prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                        prop::collection::vec(("[a-z]{1,6}", inner), 0..4)
                            .prop_map(|entries| Value::Object(entries.into_iter().collect())),
                    ]
                })
                .boxed()
        }
    }
}

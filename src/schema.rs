//! Schema builder facade
//!
//! [`Schema`] is the entry point for building validators. Each function
//! returns a fresh, unconfigured validator ready for chaining:
//!
//! ```
//! use sluice::{Schema, Validator};
//! use serde_json::json;
//!
//! let signup = Schema::object()
//!     .field("email", Schema::string().email())
//!     .field("age", Schema::number().int().min(13.0))
//!     .field("plan", Schema::union([
//!         Schema::literal("free").boxed(),
//!         Schema::literal("pro").boxed(),
//!     ]))
//!     .field("deposit", Schema::currency().usd().optional());
//!
//! let result = signup.validate_json(&json!({
//!     "email": "ada@example.com",
//!     "age": 36,
//!     "plan": "pro",
//! }));
//! assert!(result.is_success());
//! ```
//!
//! The [`object!`](crate::object) and [`union!`](crate::union) macros shorten
//! the two composite constructors.

use crate::validators::{
    ArrayValidator, BooleanValidator, BoxedValidator, CurrencyValidator, DateValidator, Literal,
    LiteralValidator, NumberValidator, ObjectValidator, StringValidator, UnionValidator,
};

/// Constructors for every validator kind.
#[derive(Debug, Clone, Copy)]
pub struct Schema;

impl Schema {
    /// See [`StringValidator`].
    pub fn string() -> StringValidator {
        StringValidator::new()
    }

    /// See [`NumberValidator`].
    pub fn number() -> NumberValidator {
        NumberValidator::new()
    }

    /// See [`BooleanValidator`].
    pub fn boolean() -> BooleanValidator {
        BooleanValidator::new()
    }

    /// See [`DateValidator`].
    pub fn date() -> DateValidator {
        DateValidator::new()
    }

    /// See [`CurrencyValidator`]. Select a format before validating.
    pub fn currency() -> CurrencyValidator {
        CurrencyValidator::new()
    }

    /// An array whose elements must satisfy `item`.
    pub fn array<V>(item: V) -> ArrayValidator<V> {
        ArrayValidator::new(item)
    }

    /// An object with no fields yet; add them with
    /// [`field`](ObjectValidator::field).
    pub fn object() -> ObjectValidator {
        ObjectValidator::new()
    }

    /// A value strictly equal to `value`.
    pub fn literal(value: impl Into<Literal>) -> LiteralValidator {
        LiteralValidator::new(value)
    }

    /// The first of `alternatives` to accept the value.
    pub fn union(alternatives: impl IntoIterator<Item = BoxedValidator>) -> UnionValidator {
        UnionValidator::new(alternatives)
    }
}

/// Build an [`ObjectValidator`] from `"name" => validator` pairs.
///
/// ```
/// use sluice::{object, Schema, Validator};
/// use serde_json::json;
///
/// let point = object! {
///     "x" => Schema::number(),
///     "y" => Schema::number(),
/// };
/// assert!(point.validate_json(&json!({ "x": 1, "y": 2 })).is_success());
/// ```
#[macro_export]
macro_rules! object {
    ($($name:expr => $validator:expr),* $(,)?) => {
        $crate::Schema::object()
            $(.field($name, $validator))*
    };
}

/// Build a [`UnionValidator`] from validators of any kind.
///
/// ```
/// use sluice::{union, Schema, Validator, Value};
///
/// let size = union![Schema::literal("s"), Schema::literal("m"), Schema::literal("l")];
/// assert!(size.validate(&Value::from("m")).is_success());
/// assert!(size.validate(&Value::from("xl")).is_failure());
/// ```
#[macro_export]
macro_rules! union {
    ($($validator:expr),* $(,)?) => {
        $crate::Schema::union([
            $($crate::Validator::boxed($validator)),*
        ])
    };
}

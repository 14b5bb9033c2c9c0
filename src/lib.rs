//! # Sluice
//!
//! Fluent, composable validation for dynamic values.
//!
//! Build a validator tree with [`Schema`], hand it a [`Value`] (or a
//! `serde_json::Value`), and get back a [`ValidationResult`] carrying either
//! the validated data or *every* problem found, each tagged with the path of
//! the offending field.
//!
//! ## Quick Example
//!
//! ```rust
//! use sluice::{ErrorKind, Schema, Validator};
//! use serde_json::json;
//!
//! let order = Schema::object()
//!     .field("email", Schema::string().email())
//!     .field("total", Schema::currency().usd().positive())
//!     .field("items", Schema::array(
//!         Schema::object()
//!             .field("sku", Schema::string().min_length(3))
//!             .field("qty", Schema::number().int().min(1.0)),
//!     ).non_empty())
//!     .field("ship_by", Schema::date().yyyymmdd('-').optional());
//!
//! let result = order.validate_json(&json!({
//!     "email": "ada@example",
//!     "total": "$1,204.50",
//!     "items": [{ "sku": "AB", "qty": 2 }, { "sku": "XYZ", "qty": 0 }],
//! }));
//!
//! assert!(result.is_failure());
//! let problems: Vec<_> = result
//!     .errors()
//!     .iter()
//!     .map(|e| (e.path.as_str(), e.code))
//!     .collect();
//! assert_eq!(problems, vec![
//!     ("email", ErrorKind::PatternMismatch),
//!     ("items[0].sku", ErrorKind::MinLength),
//!     ("items[1].qty", ErrorKind::MinValue),
//! ]);
//! ```
//!
//! ## Results
//!
//! Validation never returns `Err` and never panics: failures are data. A
//! [`ValidationResult<T>`] is a [`Validation`] whose success side is
//! `Option<T>` (`None` when an optional value was absent) and whose failure
//! side is a `Vec<ValidationError>`. Composite validators report the errors
//! of all their children; only [`UnionValidator`] condenses its alternatives'
//! failures into a single error.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for values, errors and currency types
//! - `tracing`: `trace!`/`debug!` events from composite, date and currency validators
//! - `proptest`: `Arbitrary` for [`Value`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod format;
pub mod path;
pub mod schema;
pub mod semigroup;
pub mod testing;
pub mod validation;
pub mod validators;
pub mod value;

// Re-exports
pub use error::{ErrorKind, SchemaError, ValidationError};
pub use schema::Schema;
pub use semigroup::Semigroup;
pub use validation::{Validation, ValidationResult};
pub use validators::{
    ArrayValidator, BooleanValidator, BoxedValidator, CurrencyValidator, CurrencyValue,
    DateValidator, DynValidator, Literal, LiteralValidator, NumberValidator, ObjectValidator,
    StringValidator, UnionValidator, Validator,
};
pub use value::{Map, Value};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{ErrorKind, ValidationError};
    pub use crate::schema::Schema;
    pub use crate::validation::{Validation, ValidationResult};
    pub use crate::validators::{BoxedValidator, Validator};
    pub use crate::value::{Map, Value};
    pub use crate::{object, union};
}

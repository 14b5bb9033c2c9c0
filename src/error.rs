//! Error types
//!
//! Two kinds of failure exist and they never mix:
//!
//! - [`ValidationError`] is *data*. Validators collect them into a
//!   [`ValidationResult`](crate::ValidationResult); `validate` never returns `Err`.
//! - [`SchemaError`] is raised by the few builder calls that can be handed
//!   an ill-formed configuration (a regex that does not compile, a currency
//!   format whose separators collide).

use std::fmt;

/// Machine-checkable classification of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum ErrorKind {
    /// A required value was absent or null
    Required,
    /// The value has the wrong runtime type
    InvalidType,
    /// String or array shorter than allowed
    MinLength,
    /// String or array longer than allowed
    MaxLength,
    /// Number below its minimum
    MinValue,
    /// Number above its maximum
    MaxValue,
    /// String does not match the configured pattern
    PatternMismatch,
    /// Value cannot be read as a calendar date
    InvalidDate,
    /// Date string does not have the configured shape
    InvalidDateFormat,
    /// Date earlier than allowed
    MinDate,
    /// Date later than allowed
    MaxDate,
    /// Number has a fractional part
    NotInteger,
    /// No union alternative accepted the value
    UnionMismatch,
    /// Value differs from the expected literal
    LiteralMismatch,
    /// Currency validator used without selecting a format
    MissingFormat,
    /// Currency string does not follow the format's grammar
    InvalidCurrencyFormat,
    /// Negative amount where only non-negative amounts are allowed
    NegativeAmount,
    /// Amount below its minimum
    MinAmount,
    /// Amount above its maximum
    MaxAmount,
}

impl ErrorKind {
    /// The stable code string, e.g. `"MIN_LENGTH"`.
    ///
    /// ```
    /// use sluice::ErrorKind;
    ///
    /// assert_eq!(ErrorKind::InvalidCurrencyFormat.as_str(), "INVALID_CURRENCY_FORMAT");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Required => "REQUIRED",
            ErrorKind::InvalidType => "INVALID_TYPE",
            ErrorKind::MinLength => "MIN_LENGTH",
            ErrorKind::MaxLength => "MAX_LENGTH",
            ErrorKind::MinValue => "MIN_VALUE",
            ErrorKind::MaxValue => "MAX_VALUE",
            ErrorKind::PatternMismatch => "PATTERN_MISMATCH",
            ErrorKind::InvalidDate => "INVALID_DATE",
            ErrorKind::InvalidDateFormat => "INVALID_DATE_FORMAT",
            ErrorKind::MinDate => "MIN_DATE",
            ErrorKind::MaxDate => "MAX_DATE",
            ErrorKind::NotInteger => "NOT_INTEGER",
            ErrorKind::UnionMismatch => "UNION_MISMATCH",
            ErrorKind::LiteralMismatch => "LITERAL_MISMATCH",
            ErrorKind::MissingFormat => "MISSING_FORMAT",
            ErrorKind::InvalidCurrencyFormat => "INVALID_CURRENCY_FORMAT",
            ErrorKind::NegativeAmount => "NEGATIVE_AMOUNT",
            ErrorKind::MinAmount => "MIN_AMOUNT",
            ErrorKind::MaxAmount => "MAX_AMOUNT",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single failed check, addressed by the path of the offending field.
///
/// # Example
///
/// ```
/// use sluice::{ErrorKind, ValidationError};
///
/// let err = ValidationError::new("profile.email", ErrorKind::PatternMismatch, "Invalid email address");
/// assert_eq!(err.to_string(), "profile.email: Invalid email address");
///
/// let root = ValidationError::new("", ErrorKind::Required, "Value is required");
/// assert_eq!(root.to_string(), "Value is required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationError {
    /// Dotted/bracketed address such as `users[1].email`; empty at the root
    pub path: String,
    /// Human-readable description
    pub message: String,
    /// Classification
    pub code: ErrorKind,
}

impl ValidationError {
    /// Create an error at `path`.
    pub fn new(path: impl Into<String>, code: ErrorKind, message: impl Into<String>) -> Self {
        ValidationError {
            path: path.into(),
            message: message.into(),
            code,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// A schema was configured with arguments it cannot work with.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// A string pattern failed to compile
    #[error("invalid pattern {pattern:?}")]
    InvalidPattern {
        /// The pattern as given
        pattern: String,
        /// Why the regex engine rejected it
        #[source]
        source: regex::Error,
    },

    /// Currency symbol or code was empty
    #[error("currency symbol and code must not be empty")]
    EmptyCurrencyMarker,

    /// Decimal and thousands separators are the same character
    #[error("decimal and thousands separators are both {separator:?}")]
    AmbiguousSeparators {
        /// The shared separator
        separator: char,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_kind_codes_are_screaming_snake_case() {
        let kinds = [
            ErrorKind::Required,
            ErrorKind::MinLength,
            ErrorKind::InvalidDateFormat,
            ErrorKind::MaxAmount,
        ];
        for kind in kinds {
            let code = kind.as_str();
            assert!(code.chars().all(|c| c.is_ascii_uppercase() || c == '_'));
            assert_eq!(kind.to_string(), code);
        }
    }

    #[test]
    fn test_validation_error_display_with_path() {
        let err = ValidationError::new("[1].email", ErrorKind::PatternMismatch, "bad");
        assert_eq!(format!("{}", err), "[1].email: bad");
    }

    #[test]
    fn test_schema_error_keeps_regex_source() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = SchemaError::InvalidPattern {
            pattern: "(".to_string(),
            source,
        };
        assert!(err.to_string().contains("invalid pattern"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_ambiguous_separators_message() {
        let err = SchemaError::AmbiguousSeparators { separator: '.' };
        assert_eq!(err.to_string(), "decimal and thousands separators are both '.'");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_error_serializes_code_as_string() {
        let err = ValidationError::new("age", ErrorKind::MinValue, "too small");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"path": "age", "message": "too small", "code": "MIN_VALUE"})
        );
    }
}

//! String validator

use std::sync::LazyLock;

use regex::Regex;

use super::{Modifiers, Presence, Validator};
use crate::error::{ErrorKind, SchemaError};
use crate::validation::{Validation, ValidationResult};
use crate::value::Value;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://\S+$").expect("url pattern is a valid regex"));

/// Validates strings against length and pattern constraints.
///
/// All configured constraints are checked and every failure is reported.
///
/// # Example
///
/// ```
/// use sluice::{ErrorKind, Schema, Validator, Value};
/// use regex::Regex;
///
/// let code = Schema::string()
///     .min_length(5)
///     .pattern(Regex::new("^[A-Z]+$").unwrap());
///
/// let result = code.validate(&Value::from("ab"));
/// assert_eq!(
///     result.error_codes(),
///     vec![ErrorKind::MinLength, ErrorKind::PatternMismatch]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringValidator {
    modifiers: Modifiers,
    min_length: Option<usize>,
    max_length: Option<usize>,
    pattern: Option<Regex>,
    pattern_message: Option<String>,
}

impl_modifiers!(StringValidator);

impl StringValidator {
    /// A string validator with no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require at least `n` characters.
    pub fn min_length(mut self, n: usize) -> Self {
        self.min_length = Some(n);
        self
    }

    /// Allow at most `n` characters.
    pub fn max_length(mut self, n: usize) -> Self {
        self.max_length = Some(n);
        self
    }

    /// Require a match of `pattern` somewhere in the string. Anchor the
    /// regex with `^...$` to match the whole string.
    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self.pattern_message = None;
        self
    }

    /// Compile `pattern` and require a match.
    ///
    /// ```
    /// use sluice::Schema;
    ///
    /// assert!(Schema::string().try_pattern("^[a-z]+$").is_ok());
    /// assert!(Schema::string().try_pattern("[unclosed").is_err());
    /// ```
    pub fn try_pattern(self, pattern: &str) -> Result<Self, SchemaError> {
        let compiled = Regex::new(pattern).map_err(|source| SchemaError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(self.pattern(compiled))
    }

    /// Require an address of the form `local@domain.tld`.
    pub fn email(mut self) -> Self {
        self.pattern = Some(EMAIL_PATTERN.clone());
        self.pattern_message = Some("Invalid email address".to_string());
        self
    }

    /// Require an `http://` or `https://` URL.
    pub fn url(mut self) -> Self {
        self.pattern = Some(URL_PATTERN.clone());
        self.pattern_message = Some("Invalid URL".to_string());
        self
    }
}

impl Validator for StringValidator {
    type Output = String;

    fn validate_at(&self, value: Option<&Value>, path: &str) -> ValidationResult<String> {
        let value = match self.modifiers.presence(value, path) {
            Presence::Present(value) => value,
            Presence::Settled(result) => return result,
        };
        let Value::String(text) = value else {
            return Validation::reject(self.modifiers.type_error(path, "string", value));
        };

        let mut errors = Vec::new();
        let length = text.chars().count();

        if let Some(min) = self.min_length {
            if length < min {
                errors.push(self.modifiers.error(
                    path,
                    ErrorKind::MinLength,
                    format!("String must be at least {} characters long", min),
                ));
            }
        }

        if let Some(max) = self.max_length {
            if length > max {
                errors.push(self.modifiers.error(
                    path,
                    ErrorKind::MaxLength,
                    format!("String must be at most {} characters long", max),
                ));
            }
        }

        if let Some(pattern) = &self.pattern {
            if !pattern.is_match(text) {
                let default = match &self.pattern_message {
                    Some(message) => message.clone(),
                    None => format!("String must match pattern {}", pattern.as_str()),
                };
                errors.push(self.modifiers.error(path, ErrorKind::PatternMismatch, default));
            }
        }

        Validation::settle(text.clone(), errors)
    }
}

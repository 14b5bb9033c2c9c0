//! Date validator

use chrono::{DateTime, Utc};

use super::{Modifiers, Presence, Validator};
use crate::error::{ErrorKind, SchemaError, ValidationError};
use crate::format::date::{from_timestamp_millis, parse_date, DateFormat, DatePattern};
use crate::validation::{Validation, ValidationResult};
use crate::value::{iso_string, Value};

const INVALID_DATE_MESSAGE: &str = "Invalid date";

/// Validates dates given as native dates, millisecond timestamps or strings.
///
/// With a format configured, a string must first have the format's shape
/// (`INVALID_DATE_FORMAT`) and then name a real calendar date
/// (`INVALID_DATE`). Without one, strings go through generic date parsing.
/// Range checks run only on a valid date and report every violated bound.
///
/// # Example
///
/// ```
/// use sluice::{ErrorKind, Schema, Validator, Value};
///
/// let birthday = Schema::date().ddmmyyyy('/');
/// assert!(birthday.validate(&Value::from("25/12/2023")).is_success());
/// assert_eq!(
///     birthday.validate(&Value::from("2023-12-25")).error_codes(),
///     vec![ErrorKind::InvalidDateFormat]
/// );
/// assert_eq!(
///     birthday.validate(&Value::from("12/25/2023")).error_codes(),
///     vec![ErrorKind::InvalidDate]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateValidator {
    modifiers: Modifiers,
    min: Option<DateTime<Utc>>,
    max: Option<DateTime<Utc>>,
    format: Option<DateFormat>,
}

impl_modifiers!(DateValidator);

impl DateValidator {
    /// A date validator accepting any parseable date.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the date to be on or after `min`.
    pub fn min(mut self, min: DateTime<Utc>) -> Self {
        self.min = Some(min);
        self
    }

    /// Require the date to be on or before `max`.
    pub fn max(mut self, max: DateTime<Utc>) -> Self {
        self.max = Some(max);
        self
    }

    /// Require a date no later than the moment this is called.
    pub fn past(self) -> Self {
        self.max(Utc::now())
    }

    /// Require a date no earlier than the moment this is called.
    pub fn future(self) -> Self {
        self.min(Utc::now())
    }

    /// Require strings to follow `pattern`, built from `DD`, `MM`, `YYYY`
    /// and `YY`. The sentinel `"ISO8601"` selects [`iso8601`](Self::iso8601).
    ///
    /// # Panics
    ///
    /// Panics if the pattern is too large to compile; see
    /// [`try_format`](Self::try_format).
    pub fn format(mut self, pattern: &str) -> Self {
        self.format = Some(DateFormat::parse(pattern));
        self
    }

    /// Like [`format`](Self::format), for patterns that may not compile.
    ///
    /// ```
    /// use sluice::Schema;
    ///
    /// assert!(Schema::date().try_format("YYYY/MM/DD").is_ok());
    /// ```
    pub fn try_format(mut self, pattern: &str) -> Result<Self, SchemaError> {
        self.format = Some(DateFormat::try_parse(pattern)?);
        Ok(self)
    }

    /// `DD{sep}MM{sep}YYYY`
    pub fn ddmmyyyy(self, sep: char) -> Self {
        self.with_pattern(DatePattern::ddmmyyyy(sep))
    }

    /// `MM{sep}DD{sep}YYYY`
    pub fn mmddyyyy(self, sep: char) -> Self {
        self.with_pattern(DatePattern::mmddyyyy(sep))
    }

    /// `YYYY{sep}MM{sep}DD`
    pub fn yyyymmdd(self, sep: char) -> Self {
        self.with_pattern(DatePattern::yyyymmdd(sep))
    }

    /// `DD{sep}MM{sep}YY`, years `00`–`29` in the 2000s and `30`–`99` in the 1900s
    pub fn ddmmyy(self, sep: char) -> Self {
        self.with_pattern(DatePattern::ddmmyy(sep))
    }

    /// `MM{sep}DD{sep}YY`, same year pivot as [`ddmmyy`](Self::ddmmyy)
    pub fn mmddyy(self, sep: char) -> Self {
        self.with_pattern(DatePattern::mmddyy(sep))
    }

    /// Require `YYYY-MM-DDTHH:MM:SS[.mmm][Z]`.
    pub fn iso8601(mut self) -> Self {
        self.format = Some(DateFormat::Iso8601);
        self
    }

    fn with_pattern(mut self, pattern: DatePattern) -> Self {
        self.format = Some(DateFormat::Pattern(pattern));
        self
    }

    fn read_string(&self, text: &str, path: &str) -> Result<DateTime<Utc>, ValidationError> {
        let parsed = match &self.format {
            Some(format) => {
                if !format.is_match(text) {
                    return Err(self.modifiers.error(
                        path,
                        ErrorKind::InvalidDateFormat,
                        format!("Date must match format {}", format),
                    ));
                }
                format.to_date(text)
            }
            None => parse_date(text),
        };
        parsed.ok_or_else(|| self.invalid_date(path))
    }

    fn invalid_date(&self, path: &str) -> ValidationError {
        #[cfg(feature = "tracing")]
        tracing::trace!(path, "value is not a calendar date");
        self.modifiers
            .error(path, ErrorKind::InvalidDate, INVALID_DATE_MESSAGE)
    }
}

impl Validator for DateValidator {
    type Output = DateTime<Utc>;

    fn validate_at(&self, value: Option<&Value>, path: &str) -> ValidationResult<DateTime<Utc>> {
        let value = match self.modifiers.presence(value, path) {
            Presence::Present(value) => value,
            Presence::Settled(result) => return result,
        };

        let read = match value {
            Value::Date(date) => Ok(*date),
            Value::Number(millis) => {
                from_timestamp_millis(*millis).ok_or_else(|| self.invalid_date(path))
            }
            Value::String(text) => self.read_string(text, path),
            other => Err(self.modifiers.type_error(path, "date", other)),
        };
        let date = match read {
            Ok(date) => date,
            Err(error) => return Validation::reject(error),
        };

        let mut errors = Vec::new();

        if let Some(min) = &self.min {
            if date < *min {
                errors.push(self.modifiers.error(
                    path,
                    ErrorKind::MinDate,
                    format!("Date must be on or after {}", iso_string(min)),
                ));
            }
        }

        if let Some(max) = &self.max {
            if date > *max {
                errors.push(self.modifiers.error(
                    path,
                    ErrorKind::MaxDate,
                    format!("Date must be on or before {}", iso_string(max)),
                ));
            }
        }

        Validation::settle(date, errors)
    }
}

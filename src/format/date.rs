//! Date grammars
//!
//! A [`DatePattern`] is built from a pattern string made of the tokens
//! `DD`, `MM`, `YYYY` and `YY`; every other character is a literal. The
//! pattern is compiled into an anchored regex that checks the *shape* of a
//! string, and a matching string is then turned into a calendar date.
//! Calendar dates are strict: month 13, day 32 or 29 February in a common
//! year yield no date rather than rolling over.
//!
//! ```
//! use sluice::format::DatePattern;
//!
//! let pattern = DatePattern::new("DD.MM.YYYY");
//! assert!(pattern.is_match("31.01.2024"));
//! assert!(!pattern.is_match("2024-01-31"));
//! assert!(pattern.to_date("31.01.2024").is_some());
//! assert!(pattern.to_date("31.02.2024").is_none());
//! ```

use std::fmt;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;

use crate::error::SchemaError;

static ISO_8601_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}(\.[0-9]{3})?Z?$")
        .expect("ISO 8601 shape is a valid regex")
});

/// Naive layouts tried after RFC 3339, read as UTC.
const NAIVE_DATE_TIME_LAYOUTS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Day,
    Month,
    Year,
    ShortYear,
    Literal(char),
}

impl Token {
    fn regex(self) -> String {
        match self {
            Token::Day | Token::Month | Token::ShortYear => "([0-9]{2})".to_string(),
            Token::Year => "([0-9]{4})".to_string(),
            Token::Literal(c) => regex::escape(c.encode_utf8(&mut [0; 4])),
        }
    }
}

fn tokenize(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut rest = pattern;
    while let Some(c) = rest.chars().next() {
        let (token, len) = if rest.starts_with("YYYY") {
            (Token::Year, 4)
        } else if rest.starts_with("YY") {
            (Token::ShortYear, 2)
        } else if rest.starts_with("MM") {
            (Token::Month, 2)
        } else if rest.starts_with("DD") {
            (Token::Day, 2)
        } else {
            (Token::Literal(c), c.len_utf8())
        };
        tokens.push(token);
        rest = &rest[len..];
    }
    tokens
}

/// Expand a two-digit year: `00..=29` is 2000–2029, `30..=99` is 1930–1999.
pub fn expand_short_year(year: u32) -> i32 {
    if year < 30 {
        2000 + year as i32
    } else {
        1900 + year as i32
    }
}

/// A compiled `DD`/`MM`/`YYYY`/`YY` date pattern.
#[derive(Debug, Clone)]
pub struct DatePattern {
    source: String,
    tokens: Vec<Token>,
    shape: Regex,
}

impl DatePattern {
    /// Compile `pattern`. Characters other than the four tokens match
    /// themselves literally.
    ///
    /// # Panics
    ///
    /// Panics if the compiled pattern exceeds the regex size limit, which
    /// takes a pattern hundreds of kilobytes long. Use
    /// [`try_new`](Self::try_new) for patterns from untrusted sources.
    pub fn new(pattern: &str) -> Self {
        match Self::try_new(pattern) {
            Ok(compiled) => compiled,
            Err(err) => panic!("{}", err),
        }
    }

    /// Compile `pattern`, failing when the compiled regex is too large.
    ///
    /// ```
    /// use sluice::format::DatePattern;
    ///
    /// assert!(DatePattern::try_new("DD/MM/YYYY").is_ok());
    /// ```
    pub fn try_new(pattern: &str) -> Result<Self, SchemaError> {
        let tokens = tokenize(pattern);
        let body: String = tokens.iter().map(|t| t.regex()).collect();
        let shape = Regex::new(&format!("^{}$", body)).map_err(|source| {
            SchemaError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            }
        })?;
        Ok(DatePattern {
            source: pattern.to_string(),
            tokens,
            shape,
        })
    }

    /// `DD{sep}MM{sep}YYYY`
    pub fn ddmmyyyy(sep: char) -> Self {
        Self::new(&format!("DD{sep}MM{sep}YYYY"))
    }

    /// `MM{sep}DD{sep}YYYY`
    pub fn mmddyyyy(sep: char) -> Self {
        Self::new(&format!("MM{sep}DD{sep}YYYY"))
    }

    /// `YYYY{sep}MM{sep}DD`
    pub fn yyyymmdd(sep: char) -> Self {
        Self::new(&format!("YYYY{sep}MM{sep}DD"))
    }

    /// `DD{sep}MM{sep}YY`
    pub fn ddmmyy(sep: char) -> Self {
        Self::new(&format!("DD{sep}MM{sep}YY"))
    }

    /// `MM{sep}DD{sep}YY`
    pub fn mmddyy(sep: char) -> Self {
        Self::new(&format!("MM{sep}DD{sep}YY"))
    }

    /// The pattern string this was compiled from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether `text` has the pattern's shape. Says nothing about whether
    /// the numbers form a real date.
    pub fn is_match(&self, text: &str) -> bool {
        self.shape.is_match(text)
    }

    /// Read `text` as a calendar date at midnight UTC.
    ///
    /// A missing day or month token counts as 1. Returns `None` when the
    /// shape does not match, the pattern has no year, or the date does not
    /// exist.
    pub fn to_date(&self, text: &str) -> Option<DateTime<Utc>> {
        let captures = self.shape.captures(text)?;
        let mut groups = captures.iter().skip(1).flatten();

        let (mut day, mut month, mut year) = (1, 1, None);
        for token in &self.tokens {
            let mut number = || -> Option<u32> { groups.next()?.as_str().parse().ok() };
            match token {
                Token::Day => day = number()?,
                Token::Month => month = number()?,
                Token::Year => year = Some(number()? as i32),
                Token::ShortYear => year = Some(expand_short_year(number()?)),
                Token::Literal(_) => {}
            }
        }

        let date = NaiveDate::from_ymd_opt(year?, month, day)?;
        Some(date.and_hms_opt(0, 0, 0)?.and_utc())
    }
}

impl PartialEq for DatePattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl fmt::Display for DatePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// How a date string must be written.
#[derive(Debug, Clone, PartialEq)]
pub enum DateFormat {
    /// A token pattern such as `DD/MM/YYYY`
    Pattern(DatePattern),
    /// `YYYY-MM-DDTHH:MM:SS[.mmm][Z]`
    Iso8601,
}

impl DateFormat {
    /// The sentinel accepted by [`DateFormat::parse`] for ISO 8601.
    pub const ISO8601: &'static str = "ISO8601";

    /// `"ISO8601"` selects ISO 8601; anything else is a token pattern.
    ///
    /// # Panics
    ///
    /// Panics where [`DatePattern::new`] does.
    pub fn parse(pattern: &str) -> Self {
        if pattern == Self::ISO8601 {
            DateFormat::Iso8601
        } else {
            DateFormat::Pattern(DatePattern::new(pattern))
        }
    }

    /// Like [`parse`](Self::parse), returning an error instead of panicking.
    pub fn try_parse(pattern: &str) -> Result<Self, SchemaError> {
        if pattern == Self::ISO8601 {
            Ok(DateFormat::Iso8601)
        } else {
            DatePattern::try_new(pattern).map(DateFormat::Pattern)
        }
    }

    /// Whether `text` has the required shape.
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            DateFormat::Pattern(pattern) => pattern.is_match(text),
            DateFormat::Iso8601 => ISO_8601_SHAPE.is_match(text),
        }
    }

    /// Read a string that already has the right shape.
    pub fn to_date(&self, text: &str) -> Option<DateTime<Utc>> {
        match self {
            DateFormat::Pattern(pattern) => pattern.to_date(text),
            DateFormat::Iso8601 => parse_date(text),
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateFormat::Pattern(pattern) => fmt::Display::fmt(pattern, f),
            DateFormat::Iso8601 => f.write_str(Self::ISO8601),
        }
    }
}

/// Parse a date written in any common machine format.
///
/// Tries, in order: RFC 3339, `YYYY-MM-DDTHH:MM:SS[.fff]`,
/// `YYYY-MM-DD HH:MM:SS[.fff]`, `YYYY-MM-DD` and RFC 2822. Values without
/// an offset are read as UTC.
///
/// ```
/// use sluice::format::date::parse_date;
///
/// assert!(parse_date("2024-03-01T10:15:00Z").is_some());
/// assert!(parse_date("2024-03-01").is_some());
/// assert!(parse_date("Fri, 01 Mar 2024 10:15:00 +0000").is_some());
/// assert!(parse_date("yesterday").is_none());
/// ```
pub fn parse_date(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(text) {
        return Some(date.with_timezone(&Utc));
    }
    for layout in NAIVE_DATE_TIME_LAYOUTS {
        if let Ok(date) = NaiveDateTime::parse_from_str(text, layout) {
            return Some(date.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    DateTime::parse_from_rfc2822(text)
        .ok()
        .map(|date| date.with_timezone(&Utc))
}

/// Interpret a number as milliseconds since the Unix epoch.
///
/// Fractional milliseconds are truncated. Non-finite and out-of-range
/// numbers yield `None`.
pub fn from_timestamp_millis(millis: f64) -> Option<DateTime<Utc>> {
    if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp_millis(millis.trunc() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_tokenize_prefers_four_digit_year() {
        assert_eq!(
            tokenize("YYYY-YY"),
            vec![Token::Year, Token::Literal('-'), Token::ShortYear]
        );
    }

    #[test]
    fn test_literals_are_escaped() {
        let pattern = DatePattern::new("DD.MM.YYYY");
        assert!(pattern.is_match("01.02.2024"));
        assert!(!pattern.is_match("01x02x2024"));
    }

    #[test]
    fn test_shape_is_anchored() {
        let pattern = DatePattern::ddmmyyyy('/');
        assert!(!pattern.is_match("01/02/2024 "));
        assert!(!pattern.is_match("x01/02/2024"));
        assert!(!pattern.is_match("1/2/2024"));
    }

    #[test]
    fn test_presets() {
        assert_eq!(DatePattern::ddmmyyyy('/').as_str(), "DD/MM/YYYY");
        assert_eq!(DatePattern::mmddyyyy('-').as_str(), "MM-DD-YYYY");
        assert_eq!(DatePattern::yyyymmdd('.').as_str(), "YYYY.MM.DD");
        assert_eq!(DatePattern::ddmmyy('/').as_str(), "DD/MM/YY");
        assert_eq!(DatePattern::mmddyy('/').as_str(), "MM/DD/YY");
    }

    #[test]
    fn test_to_date_by_token_position() {
        assert_eq!(
            DatePattern::ddmmyyyy('/').to_date("25/12/2023"),
            Some(utc(2023, 12, 25))
        );
        assert_eq!(
            DatePattern::mmddyyyy('/').to_date("12/25/2023"),
            Some(utc(2023, 12, 25))
        );
        assert_eq!(
            DatePattern::yyyymmdd('-').to_date("2023-12-25"),
            Some(utc(2023, 12, 25))
        );
    }

    #[test]
    fn test_month_overflow_is_not_a_date() {
        let pattern = DatePattern::ddmmyyyy('/');
        assert!(pattern.is_match("12/25/2023"));
        assert_eq!(pattern.to_date("12/25/2023"), None);
    }

    #[test]
    fn test_day_overflow_is_not_a_date() {
        let pattern = DatePattern::yyyymmdd('-');
        assert_eq!(pattern.to_date("2023-04-31"), None);
        assert_eq!(pattern.to_date("2023-02-29"), None);
        assert_eq!(pattern.to_date("2024-02-29"), Some(utc(2024, 2, 29)));
    }

    #[test]
    fn test_short_year_pivot() {
        assert_eq!(expand_short_year(0), 2000);
        assert_eq!(expand_short_year(29), 2029);
        assert_eq!(expand_short_year(30), 1930);
        assert_eq!(expand_short_year(99), 1999);
        assert_eq!(
            DatePattern::ddmmyy('/').to_date("01/06/95"),
            Some(utc(1995, 6, 1))
        );
    }

    #[test]
    fn test_missing_tokens() {
        assert_eq!(DatePattern::new("YYYY").to_date("2020"), Some(utc(2020, 1, 1)));
        assert_eq!(DatePattern::new("DD/MM").to_date("01/02"), None);
    }

    #[test]
    fn test_iso_sentinel() {
        let format = DateFormat::parse("ISO8601");
        assert_eq!(format, DateFormat::Iso8601);
        assert!(format.is_match("2024-01-31T12:00:00Z"));
        assert!(format.is_match("2024-01-31T12:00:00.250Z"));
        assert!(format.is_match("2024-01-31T12:00:00"));
        assert!(!format.is_match("2024-01-31"));
        assert!(!format.is_match("2024-01-31T12:00:00.25Z"));
        assert_eq!(
            format.to_date("2024-01-31T12:00:00"),
            Some(Utc.with_ymd_and_hms(2024, 1, 31, 12, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_parse_date_reads_offsets_into_utc() {
        assert_eq!(
            parse_date("2024-01-31T02:00:00+02:00"),
            Some(Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_from_timestamp_millis() {
        assert_eq!(from_timestamp_millis(0.0), Some(utc(1970, 1, 1)));
        assert_eq!(
            from_timestamp_millis(86_400_000.9),
            Some(utc(1970, 1, 2))
        );
        assert_eq!(from_timestamp_millis(f64::NAN), None);
        assert_eq!(from_timestamp_millis(f64::INFINITY), None);
        assert_eq!(from_timestamp_millis(1e300), None);
    }

    #[test]
    fn test_shape_requires_ascii_digits() {
        let pattern = DatePattern::ddmmyyyy('/');
        assert!(!pattern.is_match("٢٥/١٢/٢٠٢٣"));
        assert!(!DateFormat::Iso8601.is_match("２０２４-０１-３１T１０:００:００Z"));
    }

    #[test]
    fn test_oversized_pattern_is_an_error() {
        let huge = "YYYY".repeat(250_000);
        assert!(matches!(
            DatePattern::try_new(&huge),
            Err(SchemaError::InvalidPattern { .. })
        ));
        assert!(DateFormat::try_parse("ISO8601").is_ok());
    }
}

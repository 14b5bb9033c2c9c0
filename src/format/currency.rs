//! Currency amount grammar
//!
//! A [`CurrencyFormat`] describes how one currency writes amounts: where the
//! symbol goes, which characters separate thousands and decimals, and how
//! many decimal places are shown. It both parses user text into an amount and
//! renders amounts back for messages.
//!
//! ```
//! use sluice::format::CurrencyFormat;
//!
//! let eur = CurrencyFormat::eur();
//! let parsed = eur.parse("€1.234,56").unwrap();
//! assert_eq!(parsed.amount, 1234.56);
//! assert_eq!(parsed.marker, "€");
//! assert_eq!(eur.render(1000.0), "€1.000,00");
//! ```

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::error::SchemaError;

static PLAIN_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(\.[0-9]+)?$").expect("plain decimal is a valid regex"));

/// Where the currency symbol sits relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SymbolPlacement {
    /// `$10`, `USD 10`
    #[default]
    Before,
    /// `10₽`, `10 RUB`
    After,
}

/// Character separating whole units from the fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecimalSeparator {
    /// `.`
    #[default]
    Dot,
    /// `,`
    Comma,
}

impl DecimalSeparator {
    /// The separator character.
    pub fn as_char(self) -> char {
        match self {
            DecimalSeparator::Dot => '.',
            DecimalSeparator::Comma => ',',
        }
    }
}

/// Character grouping thousands, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThousandsSeparator {
    /// `,`
    #[default]
    Comma,
    /// `.`
    Dot,
    /// A single space
    Space,
    /// No grouping
    None,
}

impl ThousandsSeparator {
    /// The separator character, or `None` when digits are not grouped.
    pub fn as_char(self) -> Option<char> {
        match self {
            ThousandsSeparator::Comma => Some(','),
            ThousandsSeparator::Dot => Some('.'),
            ThousandsSeparator::Space => Some(' '),
            ThousandsSeparator::None => None,
        }
    }
}

/// Layout settings for a custom [`CurrencyFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyOptions {
    /// Symbol before or after the amount
    pub placement: SymbolPlacement,
    /// Decimal separator
    pub decimal_separator: DecimalSeparator,
    /// Thousands separator
    pub thousands_separator: ThousandsSeparator,
    /// Fraction digits shown when rendering
    pub decimal_places: usize,
}

impl Default for CurrencyOptions {
    fn default() -> Self {
        CurrencyOptions {
            placement: SymbolPlacement::Before,
            decimal_separator: DecimalSeparator::Dot,
            thousands_separator: ThousandsSeparator::Comma,
            decimal_places: 2,
        }
    }
}

/// Why a string is not an amount in a given format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyParseError {
    /// Neither the symbol nor the code was found in its place
    #[error("{0}")]
    MissingMarker(String),
    /// The text around the marker is not a number
    #[error("Invalid numeric format")]
    InvalidNumber,
}

/// An amount read from text, with the marker that was found.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedAmount {
    /// Signed amount
    pub amount: f64,
    /// The symbol or code the text carried
    pub marker: String,
}

/// How amounts in one currency are written.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurrencyFormat {
    symbol: String,
    code: String,
    placement: SymbolPlacement,
    decimal_separator: DecimalSeparator,
    thousands_separator: ThousandsSeparator,
    decimal_places: usize,
}

impl CurrencyFormat {
    /// A custom format.
    ///
    /// Fails when the symbol or code is empty, or when both separators are
    /// the same character.
    ///
    /// ```
    /// use sluice::format::{CurrencyFormat, CurrencyOptions, SymbolPlacement, ThousandsSeparator};
    ///
    /// let chf = CurrencyFormat::new("Fr.", "CHF", CurrencyOptions {
    ///     placement: SymbolPlacement::After,
    ///     thousands_separator: ThousandsSeparator::Space,
    ///     ..CurrencyOptions::default()
    /// }).unwrap();
    /// assert_eq!(chf.parse("12.50 CHF").unwrap().amount, 12.5);
    /// assert!(chf.parse("CHF 12.50").is_err());
    /// ```
    pub fn new(
        symbol: impl Into<String>,
        code: impl Into<String>,
        options: CurrencyOptions,
    ) -> Result<Self, SchemaError> {
        let symbol = symbol.into();
        let code = code.into();
        if symbol.trim().is_empty() || code.trim().is_empty() {
            return Err(SchemaError::EmptyCurrencyMarker);
        }
        let decimal = options.decimal_separator.as_char();
        if options.thousands_separator.as_char() == Some(decimal) {
            return Err(SchemaError::AmbiguousSeparators { separator: decimal });
        }
        Ok(CurrencyFormat {
            symbol,
            code,
            placement: options.placement,
            decimal_separator: options.decimal_separator,
            thousands_separator: options.thousands_separator,
            decimal_places: options.decimal_places,
        })
    }

    fn preset(
        symbol: &str,
        code: &str,
        placement: SymbolPlacement,
        decimal_separator: DecimalSeparator,
        thousands_separator: ThousandsSeparator,
    ) -> Self {
        CurrencyFormat {
            symbol: symbol.to_string(),
            code: code.to_string(),
            placement,
            decimal_separator,
            thousands_separator,
            decimal_places: 2,
        }
    }

    /// US dollars: `$1,234.56`
    pub fn usd() -> Self {
        Self::preset(
            "$",
            "USD",
            SymbolPlacement::Before,
            DecimalSeparator::Dot,
            ThousandsSeparator::Comma,
        )
    }

    /// Pounds sterling: `£1,234.56`
    pub fn gbp() -> Self {
        Self::preset(
            "£",
            "GBP",
            SymbolPlacement::Before,
            DecimalSeparator::Dot,
            ThousandsSeparator::Comma,
        )
    }

    /// Euros: `€1.234,56`
    pub fn eur() -> Self {
        Self::preset(
            "€",
            "EUR",
            SymbolPlacement::Before,
            DecimalSeparator::Comma,
            ThousandsSeparator::Dot,
        )
    }

    /// Russian roubles: `1 234.56₽`
    pub fn rub() -> Self {
        Self::preset(
            "₽",
            "RUB",
            SymbolPlacement::After,
            DecimalSeparator::Dot,
            ThousandsSeparator::Space,
        )
    }

    /// Currency symbol
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// ISO 4217 style code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Symbol placement
    pub fn placement(&self) -> SymbolPlacement {
        self.placement
    }

    /// Decimal separator
    pub fn decimal_separator(&self) -> DecimalSeparator {
        self.decimal_separator
    }

    /// Thousands separator
    pub fn thousands_separator(&self) -> ThousandsSeparator {
        self.thousands_separator
    }

    /// Fraction digits used by [`render`](Self::render)
    pub fn decimal_places(&self) -> usize {
        self.decimal_places
    }

    /// Read `input` as an amount in this format.
    ///
    /// Whitespace is trimmed and collapsed first. The amount must carry the
    /// symbol glued to the number, or the code separated by one space, on
    /// the side given by the placement.
    pub fn parse(&self, input: &str) -> Result<ParsedAmount, CurrencyParseError> {
        let collapsed = input.split_whitespace().collect::<Vec<_>>().join(" ");
        let (number, marker) = self
            .strip_marker(&collapsed)
            .ok_or_else(|| CurrencyParseError::MissingMarker(self.missing_marker_message()))?;

        let (negative, digits) = match number.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, number),
        };

        let mut plain: String = match self.thousands_separator.as_char() {
            Some(sep) => digits.chars().filter(|&c| c != sep).collect(),
            None => digits.to_string(),
        };
        if self.decimal_separator == DecimalSeparator::Comma {
            if let Some(at) = plain.rfind(',') {
                let fraction = &plain[at + 1..];
                if (1..=2).contains(&fraction.len()) && fraction.bytes().all(|b| b.is_ascii_digit())
                {
                    plain.replace_range(at..at + 1, ".");
                }
            }
        }

        if !PLAIN_DECIMAL.is_match(&plain) {
            return Err(CurrencyParseError::InvalidNumber);
        }
        let magnitude: f64 = plain
            .parse()
            .map_err(|_| CurrencyParseError::InvalidNumber)?;

        Ok(ParsedAmount {
            amount: if negative { -magnitude } else { magnitude },
            marker: marker.to_string(),
        })
    }

    /// The code is tried before the symbol so that a symbol which is also
    /// the code's first or last character (`L` / `ALL`) cannot swallow it.
    fn strip_marker<'a>(&'a self, text: &'a str) -> Option<(&'a str, &'a str)> {
        match self.placement {
            SymbolPlacement::Before => text
                .strip_prefix(self.code.as_str())
                .and_then(|rest| rest.strip_prefix(' '))
                .map(|rest| (rest, self.code.as_str()))
                .or_else(|| {
                    text.strip_prefix(self.symbol.as_str())
                        .map(|rest| (rest, self.symbol.as_str()))
                }),
            SymbolPlacement::After => text
                .strip_suffix(self.code.as_str())
                .and_then(|rest| rest.strip_suffix(' '))
                .map(|rest| (rest, self.code.as_str()))
                .or_else(|| {
                    text.strip_suffix(self.symbol.as_str())
                        .map(|rest| (rest, self.symbol.as_str()))
                }),
        }
    }

    fn missing_marker_message(&self) -> String {
        match self.placement {
            SymbolPlacement::Before => format!(
                "Amount must start with \"{}\" or \"{} \"",
                self.symbol, self.code
            ),
            SymbolPlacement::After => format!(
                "Amount must end with \"{}\" or \" {}\"",
                self.symbol, self.code
            ),
        }
    }

    /// Write `amount` the way this currency displays it. The sign follows
    /// a leading symbol, matching what [`parse`](Self::parse) accepts.
    ///
    /// ```
    /// use sluice::format::CurrencyFormat;
    ///
    /// assert_eq!(CurrencyFormat::usd().render(-1234.5), "$-1,234.50");
    /// assert_eq!(CurrencyFormat::rub().render(1000.0), "1 000.00₽");
    /// ```
    pub fn render(&self, amount: f64) -> String {
        let fixed = format!("{:.*}", self.decimal_places, amount.abs());
        let (whole, fraction) = match fixed.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (fixed.as_str(), None),
        };

        let mut number = String::with_capacity(fixed.len() + whole.len() / 3);
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                if let Some(sep) = self.thousands_separator.as_char() {
                    number.push(sep);
                }
            }
            number.push(digit);
        }
        if let Some(fraction) = fraction {
            number.push(self.decimal_separator.as_char());
            number.push_str(fraction);
        }

        let sign = if amount < 0.0 { "-" } else { "" };
        match self.placement {
            SymbolPlacement::Before => format!("{}{}{}", self.symbol, sign, number),
            SymbolPlacement::After => format!("{}{}{}", sign, number, self.symbol),
        }
    }
}

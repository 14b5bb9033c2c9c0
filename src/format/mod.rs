//! Textual grammars for dates and currency amounts
//!
//! These are the parsers behind [`DateValidator`](crate::DateValidator) and
//! [`CurrencyValidator`](crate::CurrencyValidator). They know nothing about
//! paths or error accumulation: each one either produces a typed value or
//! says why the text does not fit the grammar.

pub mod currency;
pub mod date;

pub use currency::{
    CurrencyFormat, CurrencyOptions, CurrencyParseError, DecimalSeparator, SymbolPlacement,
    ThousandsSeparator,
};
pub use date::{DateFormat, DatePattern};

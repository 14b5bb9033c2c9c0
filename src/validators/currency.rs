//! Currency validator

use super::{Modifiers, Presence, Validator};
use crate::error::{ErrorKind, SchemaError};
use crate::format::currency::{CurrencyFormat, CurrencyOptions};
use crate::validation::{Validation, ValidationResult};
use crate::value::{Map, Value};

/// A validated currency amount.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct CurrencyValue {
    /// Signed amount in whole units
    pub amount: f64,
    /// The symbol or code found in the input
    pub currency: String,
    /// The input exactly as received
    pub original_string: String,
}

impl From<CurrencyValue> for Value {
    fn from(value: CurrencyValue) -> Self {
        let mut map = Map::new();
        map.insert("amount".to_string(), Value::Number(value.amount));
        map.insert("currency".to_string(), Value::String(value.currency));
        map.insert(
            "originalString".to_string(),
            Value::String(value.original_string),
        );
        Value::Object(map)
    }
}

/// Parses and range-checks currency strings such as `"$1,234.56"`.
///
/// A format must be selected before use; without one every present value
/// fails with `MISSING_FORMAT`. Negative amounts are rejected unless
/// [`allow_negative_amounts`](Self::allow_negative_amounts) is set. Amount
/// checks run only after a successful parse and all of them are reported.
///
/// # Example
///
/// ```
/// use sluice::{ErrorKind, Schema, Validator, Value};
///
/// let price = Schema::currency().usd().max(1000.0);
/// let result = price.validate(&Value::from("$1,234.56"));
/// assert_eq!(result.error_codes(), vec![ErrorKind::MaxAmount]);
/// assert_eq!(result.errors()[0].message, "Amount must be at most $1,000.00");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrencyValidator {
    modifiers: Modifiers,
    format: Option<CurrencyFormat>,
    min: Option<f64>,
    max: Option<f64>,
    allow_negative: bool,
}

impl_modifiers!(CurrencyValidator);

impl CurrencyValidator {
    /// A currency validator with no format selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an already built format.
    pub fn with_format(mut self, format: CurrencyFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// US dollars: `$1,234.56` or `USD 1,234.56`
    pub fn usd(self) -> Self {
        self.with_format(CurrencyFormat::usd())
    }

    /// Pounds sterling: `£1,234.56` or `GBP 1,234.56`
    pub fn gbp(self) -> Self {
        self.with_format(CurrencyFormat::gbp())
    }

    /// Euros: `€1.234,56` or `EUR 1.234,56`
    pub fn eur(self) -> Self {
        self.with_format(CurrencyFormat::eur())
    }

    /// Russian roubles: `1 234.56₽` or `1 234.56 RUB`
    pub fn rub(self) -> Self {
        self.with_format(CurrencyFormat::rub())
    }

    /// A custom currency.
    ///
    /// ```
    /// use sluice::format::CurrencyOptions;
    /// use sluice::{Schema, Validator, Value};
    ///
    /// let yen = Schema::currency()
    ///     .currency("¥", "JPY", CurrencyOptions { decimal_places: 0, ..Default::default() })
    ///     .unwrap();
    /// assert!(yen.validate(&Value::from("¥1,500")).is_success());
    /// ```
    pub fn currency(
        self,
        symbol: impl Into<String>,
        code: impl Into<String>,
        options: CurrencyOptions,
    ) -> Result<Self, SchemaError> {
        Ok(self.with_format(CurrencyFormat::new(symbol, code, options)?))
    }

    /// Require `amount >= min`.
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Require `amount <= max`.
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Shorthand for `min(min).max(max)`.
    pub fn range(self, min: f64, max: f64) -> Self {
        self.min(min).max(max)
    }

    /// Shorthand for `min(0.0)`.
    pub fn positive(self) -> Self {
        self.min(0.0)
    }

    /// Accept amounts below zero.
    pub fn allow_negative_amounts(mut self) -> Self {
        self.allow_negative = true;
        self
    }

    /// The selected format, if any.
    pub fn currency_format(&self) -> Option<&CurrencyFormat> {
        self.format.as_ref()
    }
}

impl Validator for CurrencyValidator {
    type Output = CurrencyValue;

    fn validate_at(&self, value: Option<&Value>, path: &str) -> ValidationResult<CurrencyValue> {
        let value = match self.modifiers.presence(value, path) {
            Presence::Present(value) => value,
            Presence::Settled(result) => return result,
        };
        let Some(format) = &self.format else {
            return Validation::reject(self.modifiers.error(
                path,
                ErrorKind::MissingFormat,
                "Currency format must be specified",
            ));
        };
        let Value::String(text) = value else {
            return Validation::reject(self.modifiers.type_error(path, "string", value));
        };

        let parsed = match format.parse(text) {
            Ok(parsed) => parsed,
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(path, input = %text, code = format.code(), "currency parse failed: {}", err);
                return Validation::reject(self.modifiers.error(
                    path,
                    ErrorKind::InvalidCurrencyFormat,
                    err.to_string(),
                ));
            }
        };
        let amount = parsed.amount;

        let mut errors = Vec::new();

        if !self.allow_negative && amount < 0.0 {
            errors.push(self.modifiers.error(
                path,
                ErrorKind::NegativeAmount,
                "Amount cannot be negative",
            ));
        }

        if let Some(min) = self.min {
            if amount < min {
                errors.push(self.modifiers.error(
                    path,
                    ErrorKind::MinAmount,
                    format!("Amount must be at least {}", format.render(min)),
                ));
            }
        }

        if let Some(max) = self.max {
            if amount > max {
                errors.push(self.modifiers.error(
                    path,
                    ErrorKind::MaxAmount,
                    format!("Amount must be at most {}", format.render(max)),
                ));
            }
        }

        Validation::settle(
            CurrencyValue {
                amount,
                currency: parsed.marker,
                original_string: text.clone(),
            },
            errors,
        )
    }
}

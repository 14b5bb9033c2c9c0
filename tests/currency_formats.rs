//! Currency parsing across the preset formats

use sluice::format::{CurrencyOptions, DecimalSeparator, SymbolPlacement, ThousandsSeparator};
use sluice::{assert_error_codes, CurrencyValue, ErrorKind, Schema, SchemaError, Validator, Value};

fn amount(result: sluice::ValidationResult<CurrencyValue>) -> f64 {
    result.into_data().expect("currency should validate").amount
}

#[test]
fn usd_round_trip() {
    let result = Schema::currency().usd().validate(&Value::from("$1,234.56"));
    let data = result.data().unwrap();
    assert_eq!(data.amount, 1234.56);
    assert_eq!(data.currency, "$");
    assert_eq!(data.original_string, "$1,234.56");
}

#[test]
fn usd_without_marker_is_rejected() {
    assert_error_codes!(
        Schema::currency().usd().validate(&Value::from("1234.56")),
        [ErrorKind::InvalidCurrencyFormat]
    );
}

#[test]
fn each_preset_accepts_its_own_grammar() {
    let cases = [
        (Schema::currency().usd(), "USD 1,000.50", 1000.5),
        (Schema::currency().gbp(), "£12", 12.0),
        (Schema::currency().eur(), "€1.234.567,8", 1234567.8),
        (Schema::currency().eur(), "EUR 99,99", 99.99),
        (Schema::currency().rub(), "12 345₽", 12345.0),
        (Schema::currency().rub(), "0.5 RUB", 0.5),
    ];
    for (validator, input, expected) in cases {
        assert_eq!(amount(validator.validate(&Value::from(input))), expected, "{input}");
    }
}

#[test]
fn presets_reject_each_others_markers() {
    assert_error_codes!(
        Schema::currency().gbp().validate(&Value::from("$5")),
        [ErrorKind::InvalidCurrencyFormat]
    );
    assert_error_codes!(
        Schema::currency().rub().validate(&Value::from("₽5")),
        [ErrorKind::InvalidCurrencyFormat]
    );
}

#[test]
fn amount_checks_accumulate_after_parse() {
    let validator = Schema::currency().eur().range(10.0, 20.0);
    let result = validator.validate(&Value::from("€-1.500,00"));
    assert_error_codes!(result.clone(), [ErrorKind::NegativeAmount, ErrorKind::MinAmount]);
    assert_eq!(result.errors()[1].message, "Amount must be at least €10,00");
}

#[test]
fn custom_currency_after_placement() {
    let sek = Schema::currency()
        .currency(
            "kr",
            "SEK",
            CurrencyOptions {
                placement: SymbolPlacement::After,
                decimal_separator: DecimalSeparator::Comma,
                thousands_separator: ThousandsSeparator::Space,
                decimal_places: 2,
            },
        )
        .unwrap()
        .max(10_000.0);

    assert_eq!(amount(sek.validate(&Value::from("1 250,75kr"))), 1250.75);
    assert_eq!(amount(sek.validate(&Value::from("1 250,75 SEK"))), 1250.75);

    let result = sek.validate(&Value::from("20 000kr"));
    assert_eq!(result.errors()[0].message, "Amount must be at most 10 000,00kr");
}

#[test]
fn custom_currency_with_colliding_separators_fails_to_build() {
    let result = Schema::currency().currency(
        "¤",
        "XTS",
        CurrencyOptions {
            decimal_separator: DecimalSeparator::Dot,
            thousands_separator: ThousandsSeparator::Dot,
            ..CurrencyOptions::default()
        },
    );
    let err = result.unwrap_err();
    assert!(matches!(err, SchemaError::AmbiguousSeparators { separator: '.' }));
    assert_eq!(err.to_string(), "decimal and thousands separators are both '.'");
}

#[test]
fn currency_output_converts_to_object() {
    let result = Schema::object()
        .field("price", Schema::currency().gbp())
        .validate_json(&serde_json::json!({ "price": "£3.50" }));
    let data = Value::Object(result.into_data().unwrap());
    assert_eq!(
        data.to_json(),
        serde_json::json!({
            "price": { "amount": 3.5, "currency": "£", "originalString": "£3.50" }
        })
    );
}

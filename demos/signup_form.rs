//! Validates a few signup submissions and prints every problem found
//!
//! Run with: cargo run --example signup_form --features tracing

use serde_json::json;
use sluice::prelude::*;

fn signup_schema() -> sluice::ObjectValidator {
    object! {
        "username" => Schema::string().min_length(3).max_length(20).try_pattern("^[a-z0-9_]+$")
            .expect("username pattern compiles"),
        "email" => Schema::string().email(),
        "age" => Schema::number().int().min(13.0).with_message("You must be 13 or older"),
        "birthday" => Schema::date().ddmmyyyy('/').past().optional(),
        "plan" => union![Schema::literal("free"), Schema::literal("pro"), Schema::literal("team")],
        "deposit" => Schema::currency().usd().range(0.0, 500.0).optional(),
        "interests" => Schema::array(Schema::string().min_length(2)).max_length(5).optional(),
        "address" => object! {
            "city" => Schema::string().min_length(1),
            "postcode" => Schema::string().try_pattern(r"^\d{5}$")
                .expect("postcode pattern compiles"),
        }.optional(),
    }
}

fn report(label: &str, result: ValidationResult<Map>) {
    match result {
        Validation::Success(data) => {
            let data = Value::Object(data.unwrap_or_default());
            tracing::info!("{label}: accepted {}", data.to_json());
        }
        Validation::Failure(errors) => {
            tracing::warn!("{label}: {} problem(s)", errors.len());
            for error in &errors {
                tracing::warn!("  [{}] {}", error.code, error);
            }
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let schema = signup_schema();

    report(
        "complete",
        schema.validate_json(&json!({
            "username": "ada_l",
            "email": "ada@example.com",
            "age": 36,
            "birthday": "10/12/1815",
            "plan": "pro",
            "deposit": "$120.00",
            "interests": ["maths", "engines"],
            "address": { "city": "London", "postcode": "12345" }
        })),
    );

    report(
        "sloppy",
        schema.validate_json(&json!({
            "username": "Ada Lovelace",
            "email": "ada-at-example",
            "age": 12.5,
            "birthday": "31/02/1990",
            "plan": "enterprise",
            "deposit": "120",
            "interests": ["x"],
            "address": { "postcode": "ABC" }
        })),
    );

    report("missing", schema.validate_json(&json!(null)));
}

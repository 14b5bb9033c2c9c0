//! End-to-end validation of nested schemas

use serde_json::json;
use sluice::prelude::*;
use sluice::{assert_error_codes, assert_success};

fn contact_schema() -> sluice::ObjectValidator {
    Schema::object().field(
        "profile",
        Schema::object()
            .field("name", Schema::string().min_length(1))
            .field(
                "contact",
                Schema::object()
                    .field("email", Schema::string().email())
                    .field("phone", Schema::string().optional()),
            ),
    )
}

#[test]
fn nested_error_path_uses_dots() {
    let result = contact_schema().validate_json(&json!({
        "profile": { "name": "Ada", "contact": { "email": "bad" } }
    }));

    assert_error_codes!(result.clone(), [ErrorKind::PatternMismatch]);
    assert_eq!(result.errors()[0].path, "profile.contact.email");
    assert_eq!(result.errors()[0].message, "Invalid email address");
}

#[test]
fn nested_success_keeps_only_present_fields() {
    let result = contact_schema().validate_json(&json!({
        "profile": {
            "name": "Ada",
            "contact": { "email": "ada@example.com" },
            "nickname": "countess"
        }
    }));

    let data = Value::Object(result.into_data().unwrap());
    assert_eq!(
        data.to_json(),
        json!({ "profile": { "name": "Ada", "contact": { "email": "ada@example.com" } } })
    );
}

#[test]
fn array_of_objects_reports_index_path() {
    let users = Schema::array(Schema::object().field("email", Schema::string().email()));
    let result = users.validate_json(&json!([
        { "email": "ok@x.com" },
        { "email": "bad" }
    ]));

    assert_eq!(result.errors().len(), 1);
    assert!(result.errors()[0].path.contains("[1]"));
    assert_eq!(result.errors()[0].path, "[1].email");
}

#[test]
fn errors_from_every_level_are_collected() {
    let schema = object! {
        "title" => Schema::string().min_length(3),
        "tags" => Schema::array(Schema::string().max_length(5)).max_length(2),
        "meta" => object! { "views" => Schema::number().int().positive() },
    };

    let result = schema.validate_json(&json!({
        "title": "Hi",
        "tags": ["rust", "validation", "schemas"],
        "meta": { "views": -1.5 }
    }));

    let found: Vec<(&str, ErrorKind)> = result
        .errors()
        .iter()
        .map(|e| (e.path.as_str(), e.code))
        .collect();
    assert_eq!(
        found,
        vec![
            ("title", ErrorKind::MinLength),
            ("tags", ErrorKind::MaxLength),
            ("tags[1]", ErrorKind::MaxLength),
            ("tags[2]", ErrorKind::MaxLength),
            ("meta.views", ErrorKind::MinValue),
            ("meta.views", ErrorKind::NotInteger),
        ]
    );
}

#[test]
fn errors_at_and_within_filter_by_path() {
    let result = contact_schema().validate_json(&json!({
        "profile": { "name": "", "contact": { "email": "bad", "phone": 5 } }
    }));

    assert_eq!(result.errors_at("profile.name").count(), 1);
    assert_eq!(result.errors_within("profile.contact").count(), 2);
    assert_eq!(result.errors_within("profile").count(), 3);
}

#[test]
fn partial_schema_accepts_sparse_updates() {
    let user = object! {
        "name" => Schema::string().min_length(2),
        "age" => Schema::number().int(),
    };
    let patch = user.partial();

    assert_success!(patch.validate_json(&json!({ "age": 40 })));
    assert_error_codes!(
        patch.validate_json(&json!({ "name": "A" })),
        [ErrorKind::MinLength]
    );
    assert_error_codes!(
        user.validate_json(&json!({ "age": 40 })),
        [ErrorKind::Required]
    );
}

#[test]
fn union_of_shapes() {
    let shape = union![
        object! { "kind" => Schema::literal("circle"), "radius" => Schema::number().positive() },
        object! { "kind" => Schema::literal("square"), "side" => Schema::number().positive() },
    ];

    assert_success!(shape.validate_json(&json!({ "kind": "square", "side": 2 })));

    let result = shape.validate_at(Some(&Value::from(&json!({ "kind": "hexagon" }))), "shape");
    assert_error_codes!(result.clone(), [ErrorKind::UnionMismatch]);
    assert_eq!(result.errors()[0].path, "shape");

    let detail = shape.alternative_errors(&Value::from(&json!({ "kind": "circle" })), "shape");
    assert_eq!(detail[0][0].path, "shape.radius");
    assert_eq!(detail[0][0].code, ErrorKind::Required);
}

#[test]
fn into_result_supports_question_mark() {
    fn age_of(input: &serde_json::Value) -> Result<f64, Vec<ValidationError>> {
        let age = Schema::number().int().min(0.0).validate_json(input).into_result()?;
        Ok(age.unwrap_or_default())
    }

    assert_eq!(age_of(&json!(31)), Ok(31.0));
    assert!(age_of(&json!("31")).is_err());
}

#[test]
fn validator_trees_are_shareable_across_threads() {
    let schema = std::sync::Arc::new(object! { "n" => Schema::number().int() });

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let schema = schema.clone();
            std::thread::spawn(move || schema.validate_json(&json!({ "n": i })).is_success())
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

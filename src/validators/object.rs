//! Object validator

use std::sync::Arc;

use indexmap::IndexMap;

use super::{BoxedValidator, DynValidator, Modifiers, Presence, Validator};
use crate::path::join_key;
use crate::validation::{Validation, ValidationResult};
use crate::value::{Map, Value};

/// Validates an object field by field against a schema.
///
/// Fields are checked in declaration order and every field's errors are
/// reported. Keys the schema does not name are ignored and left out of the
/// output, as are optional fields that were absent.
///
/// A present `null` is a type error unless the object is optional; only a
/// missing object is `REQUIRED`.
///
/// # Example
///
/// ```
/// use sluice::{Schema, Validator};
/// use serde_json::json;
///
/// let user = Schema::object()
///     .field("name", Schema::string())
///     .field("age", Schema::number().int().optional());
///
/// let result = user.validate_json(&json!({ "name": "Ada", "admin": true }));
/// let data = result.into_data().unwrap();
/// assert_eq!(data.len(), 1);
/// assert!(data.contains_key("name"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ObjectValidator {
    modifiers: Modifiers,
    fields: IndexMap<String, BoxedValidator>,
}

impl_modifiers!(ObjectValidator);

impl ObjectValidator {
    /// An object with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace field `name`.
    pub fn field(mut self, name: impl Into<String>, validator: impl Validator + 'static) -> Self {
        self.fields.insert(name.into(), validator.boxed());
        self
    }

    /// Add several already boxed fields.
    pub fn with_fields<K, I>(mut self, fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, BoxedValidator)>,
    {
        self.fields
            .extend(fields.into_iter().map(|(name, validator)| (name.into(), validator)));
        self
    }

    /// The schema's field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// The validator for field `name`.
    pub fn get_field(&self, name: &str) -> Option<&BoxedValidator> {
        self.fields.get(name)
    }

    /// A copy of this validator in which every field may be absent or null.
    ///
    /// The original is left unchanged; field validators are shared.
    ///
    /// ```
    /// use sluice::{Schema, Validator};
    /// use serde_json::json;
    ///
    /// let user = Schema::object().field("name", Schema::string());
    /// assert!(user.validate_json(&json!({})).is_failure());
    /// assert!(user.partial().validate_json(&json!({})).is_success());
    /// ```
    pub fn partial(&self) -> Self {
        let fields = self
            .fields
            .iter()
            .map(|(name, validator)| {
                let wrapped: BoxedValidator = Arc::new(OptionalField(validator.clone()));
                (name.clone(), wrapped)
            })
            .collect();
        ObjectValidator {
            modifiers: self.modifiers.clone(),
            fields,
        }
    }
}

impl Validator for ObjectValidator {
    type Output = Map;

    fn validate_at(&self, value: Option<&Value>, path: &str) -> ValidationResult<Map> {
        if let Some(Value::Null) = value {
            if !self.modifiers.optional {
                return Validation::reject(self.modifiers.type_error(path, "object", &Value::Null));
            }
        }
        let value = match self.modifiers.presence(value, path) {
            Presence::Present(value) => value,
            Presence::Settled(result) => return result,
        };
        let Value::Object(input) = value else {
            return Validation::reject(self.modifiers.type_error(path, "object", value));
        };

        let fields = Validation::all_vec(self.fields.iter().map(|(name, validator)| {
            validator
                .validate_value(input.get(name), &join_key(path, name))
                .map(|data| data.map(|value| (name.clone(), value)))
        }));

        let result: ValidationResult<Map> =
            fields.map(|entries| Some(entries.into_iter().flatten().collect()));

        #[cfg(feature = "tracing")]
        tracing::trace!(
            path,
            fields = self.fields.len(),
            errors = result.errors().len(),
            "object validated"
        );

        result
    }
}

/// Field wrapper used by [`ObjectValidator::partial`].
#[derive(Debug)]
struct OptionalField(BoxedValidator);

impl Validator for OptionalField {
    type Output = Value;

    fn validate_at(&self, value: Option<&Value>, path: &str) -> ValidationResult<Value> {
        match value {
            None | Some(Value::Null) => Validation::Success(None),
            Some(_) => self.0.validate_value(value, path),
        }
    }
}

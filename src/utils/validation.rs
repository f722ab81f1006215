use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use validator::{Validate, ValidationErrors};

/// One problem with one field of a request payload.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    pub fn new(loc: Vec<String>, kind: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            loc,
            msg: msg.into(),
            kind: kind.into(),
        }
    }
}

/// A request payload shape.
///
/// Implementors declare every field as `Option<_>` and enforce presence with
/// `#[validate(required)]`, so that a single pass can report every missing or
/// malformed field instead of stopping at the first one serde trips over.
pub trait Schema: DeserializeOwned + Validate {
    /// Field names in declaration order. Errors are reported in this order
    /// and anything else in the payload is dropped.
    const FIELDS: &'static [&'static str];

    type Normalized;

    /// Only called once `validate` has passed.
    fn normalize(self) -> Self::Normalized;
}

fn body_error(kind: &str, msg: impl Into<String>) -> FieldError {
    FieldError::new(vec!["body".to_string()], kind, msg)
}

fn collect_validation_errors(errors: ValidationErrors) -> Vec<FieldError> {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            let field = field.to_string();
            errors.iter().map(move |error| {
                let msg = error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                FieldError::new(vec![field.clone()], error.code.to_string(), msg)
            })
        })
        .collect()
}

/// Checks `raw` against `S`, returning its normalized fields or every
/// violation found, ordered by `S::FIELDS`.
pub fn validate<S: Schema>(raw: Value) -> Result<S::Normalized, Vec<FieldError>> {
    let Value::Object(object) = raw else {
        return Err(vec![body_error("type_error.dict", "value is not a valid dict")]);
    };

    let mut errors = Vec::new();
    let mut accepted = Map::new();

    for (name, value) in object {
        if !S::FIELDS.contains(&name.as_str()) {
            continue;
        }

        // Each field is type-checked on its own so one bad field can't hide another.
        let mut single = Map::new();
        single.insert(name.clone(), value.clone());
        match serde_json::from_value::<S>(Value::Object(single)) {
            Ok(_) => {
                accepted.insert(name, value);
            }
            Err(err) => errors.push(FieldError::new(vec![name], "type_error", err.to_string())),
        }
    }

    let schema = serde_json::from_value::<S>(Value::Object(accepted))
        .map_err(|err| vec![body_error("type_error", err.to_string())])?;

    if let Err(validation_errors) = schema.validate() {
        for error in collect_validation_errors(validation_errors) {
            if !errors.iter().any(|existing: &FieldError| existing.loc == error.loc) {
                errors.push(error);
            }
        }
    }

    if errors.is_empty() {
        return Ok(schema.normalize());
    }

    errors.sort_by_key(|error| {
        error
            .loc
            .first()
            .and_then(|name| S::FIELDS.iter().position(|field| field == name))
    });

    tracing::warn!("Failed to validate payload: {} error(s)", errors.len());

    Err(errors)
}

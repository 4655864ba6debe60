//! Typed field extraction from untyped detail payloads.

use super::CreateTaskError;
use crate::maintenance::domain::ParseEnumError;
use serde_json::{Map, Value};

/// Untyped, string-keyed extension data supplied at task creation.
pub type DetailPayload = Map<String, Value>;

/// Reads a required string field.
pub(super) fn required_str<'a>(
    payload: &'a DetailPayload,
    field: &'static str,
) -> Result<&'a str, CreateTaskError> {
    match payload.get(field) {
        None | Some(Value::Null) => Err(CreateTaskError::MissingField { field }),
        Some(Value::String(value)) => Ok(value.as_str()),
        Some(other) => Err(CreateTaskError::invalid(
            field,
            format!("expected a string, found {}", json_kind(other)),
        )),
    }
}

/// Reads a required string field naming a member of a closed enumeration.
pub(super) fn required_enum<T>(
    payload: &DetailPayload,
    field: &'static str,
) -> Result<T, CreateTaskError>
where
    T: for<'a> TryFrom<&'a str, Error = ParseEnumError>,
{
    let raw = required_str(payload, field)?;
    T::try_from(raw).map_err(|err| CreateTaskError::invalid(field, err.to_string()))
}

/// Reads a required list field, coercing every element to a string.
///
/// String elements are taken verbatim; any other element uses its JSON text.
pub(super) fn required_string_list(
    payload: &DetailPayload,
    field: &'static str,
) -> Result<Vec<String>, CreateTaskError> {
    match payload.get(field) {
        Some(Value::Array(items)) => Ok(items.iter().map(coerce_to_string).collect()),
        None | Some(Value::Null) => Err(CreateTaskError::invalid(field, "must be a list")),
        Some(other) => Err(CreateTaskError::invalid(
            field,
            format!("must be a list, found {}", json_kind(other)),
        )),
    }
}

fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

//! Payload checks shared by the entity validators.
//!
//! Payload fields arrive loosely typed (`Option<serde_json::Value>`). Presence
//! is checked for every field before any type check, so a payload that is
//! both incomplete and mistyped reports the missing property.

use super::errors::DomainError;
use serde_json::Value;

/// A single loosely-typed payload field.
pub type Field = Option<Value>;

pub fn not_contain_needed_property(entity: &str) -> DomainError {
    DomainError::ValidationError(format!("{entity}.NOT_CONTAIN_NEEDED_PROPERTY"))
}

pub fn not_meet_data_type_specification(entity: &str) -> DomainError {
    DomainError::ValidationError(format!("{entity}.NOT_MEET_DATA_TYPE_SPECIFICATION"))
}

/// Fails unless every field is present. Absent, `null` and empty strings
/// count as missing.
pub fn ensure_present(entity: &str, fields: &[&Field]) -> Result<(), DomainError> {
    let missing = fields.iter().any(|field| match field {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    });

    if missing {
        Err(not_contain_needed_property(entity))
    } else {
        Ok(())
    }
}

/// Takes the string out of a field already known to be present.
pub fn into_text(entity: &str, field: Field) -> Result<String, DomainError> {
    match field {
        Some(Value::String(s)) => Ok(s),
        _ => Err(not_meet_data_type_specification(entity)),
    }
}

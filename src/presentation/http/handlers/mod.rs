pub mod comments;
pub mod health;
pub mod likes;
pub mod replies;
pub mod threads;

use crate::presentation::http::errors::AppError;
use axum::{
    Json,
    body::Bytes,
    http::{HeaderMap, header},
};
use serde_json::Value;

const JSON_CONTENT_TYPE_REQUIRED: &str = "Expected request with `Content-Type: application/json`";

/// Parses a JSON request body. A request with no body at all becomes an empty
/// object so the payload validators report the missing properties; any other
/// body must be declared and well-formed JSON.
pub(crate) fn json_body(headers: &HeaderMap, body: &Bytes) -> Result<Value, AppError> {
    if body.is_empty() {
        return Ok(Value::Object(Default::default()));
    }
    if !has_json_content_type(headers) {
        return Err(AppError::BadRequest(JSON_CONTENT_TYPE_REQUIRED.to_string()));
    }

    Json::<Value>::from_bytes(body)
        .map(|Json(value)| value)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// A body property as an optional JSON value, ready for a payload field.
pub(crate) fn field(body: &Value, key: &str) -> Option<Value> {
    body.get(key).cloned()
}

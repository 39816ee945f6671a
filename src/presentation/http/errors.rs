//! HTTP error handling and response conversion.
//!
//! Domain failures arrive as string-keyed signals. They are translated into
//! user-facing messages here and rendered in the forum's JSON envelope:
//! client failures as `{"status":"fail","message":..}`, server failures as
//! `{"status":"error","message":..}` with a fixed generic message.

use crate::domain::shared::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Message returned for every 5xx; the real cause only goes to the log.
pub const SERVER_FAILURE_MESSAGE: &str = "terjadi kegagalan pada server kami";

pub const MISSING_AUTHENTICATION: &str = "Missing authentication";

/// Application-level errors returned from handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found (404).
    NotFound(String),

    /// Payload failed validation or a uniqueness check (400).
    BadRequest(String),

    /// Caller is authenticated but does not own the resource (403).
    Forbidden(String),

    /// No usable bearer token on a route that needs one (401).
    Unauthorized(String),

    /// Unclassified internal error (500). Carries the cause for logging.
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl AppError {
    pub fn missing_authentication() -> Self {
        Self::Unauthorized(MISSING_AUTHENTICATION.to_string())
    }

    /// Get the appropriate HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message placed in the response envelope.
    pub fn user_message(&self) -> &str {
        match self {
            Self::NotFound(msg)
            | Self::BadRequest(msg)
            | Self::Forbidden(msg)
            | Self::Unauthorized(msg) => msg,
            Self::Internal(_) => SERVER_FAILURE_MESSAGE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = if status.is_server_error() {
            tracing::error!("error={}", self);
            json!({ "status": "error", "message": SERVER_FAILURE_MESSAGE })
        } else {
            tracing::warn!("error={}", self);
            json!({ "status": "fail", "message": self.user_message() })
        };

        (status, Json(body)).into_response()
    }
}

/// User-facing message for a domain signal, if one is registered.
pub fn translate(signal: &str) -> Option<&'static str> {
    let message = match signal {
        "ADD_THREAD.NOT_CONTAIN_NEEDED_PROPERTY" => {
            "tidak dapat membuat thread baru karena properti yang dibutuhkan tidak ada"
        }
        "ADD_THREAD.NOT_MEET_DATA_TYPE_SPECIFICATION" => {
            "tidak dapat membuat thread baru karena tipe data tidak sesuai"
        }
        "ADD_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY" => {
            "tidak dapat membuat komentar karena properti yang dibutuhkan tidak ada"
        }
        "ADD_COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION" => {
            "tidak dapat membuat komentar karena tipe data tidak sesuai"
        }
        "DELETE_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY" => {
            "tidak dapat menghapus komentar karena properti yang dibutuhkan tidak ada"
        }
        "DELETE_COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION" => {
            "tidak dapat menghapus komentar karena tipe data tidak sesuai"
        }
        "ADD_REPLY.NOT_CONTAIN_NEEDED_PROPERTY" => {
            "tidak dapat membuat balasan karena properti yang dibutuhkan tidak ada"
        }
        "ADD_REPLY.NOT_MEET_DATA_TYPE_SPECIFICATION" => {
            "tidak dapat membuat balasan karena tipe data tidak sesuai"
        }
        "DELETE_REPLY.NOT_CONTAIN_NEEDED_PROPERTY" => {
            "tidak dapat menghapus balasan karena properti yang dibutuhkan tidak ada"
        }
        "DELETE_REPLY.NOT_MEET_DATA_TYPE_SPECIFICATION" => {
            "tidak dapat menghapus balasan karena tipe data tidak sesuai"
        }
        "LIKE_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY" => {
            "tidak dapat menyukai komentar karena properti yang dibutuhkan tidak ada"
        }
        "LIKE_COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION" => {
            "tidak dapat menyukai komentar karena tipe data tidak sesuai"
        }
        "THREAD_NOT_FOUND" => "thread tidak ditemukan",
        "COMMENT_NOT_FOUND" => "komentar tidak ditemukan",
        "REPLY_NOT_FOUND" => "balasan tidak ditemukan",
        "NOT_OWNER" => "Anda tidak berhak menghapus komentar ini",
        "LIKE_ALREADY_EXISTS" => "komentar sudah disukai",
        _ => return None,
    };
    Some(message)
}

fn translated(signal: String) -> String {
    translate(&signal).map(str::to_string).unwrap_or(signal)
}

// === Domain Error Conversion ===

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::ValidationError(signal) | DomainError::Conflict(signal) => {
                AppError::BadRequest(translated(signal))
            }
            DomainError::NotFound(signal) => AppError::NotFound(translated(signal)),
            DomainError::Unauthorized(signal) => AppError::Forbidden(translated(signal)),
            DomainError::NotImplemented(signal) => {
                tracing::error!(not_implemented = %signal);
                AppError::Internal(signal)
            }
            DomainError::InfrastructureError(msg) => {
                tracing::error!(infrastructure_error = %msg);
                AppError::Internal(msg)
            }
        }
    }
}

use thiserror::Error;

/// Failure signals raised by validators and repositories.
///
/// Each variant carries a stable, string-keyed signal (for example
/// `ADD_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY` or `THREAD_NOT_FOUND`) that the
/// presentation layer translates into a user-facing message. The variant
/// itself is the error category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Not implemented: {0}")]
    NotImplemented(String),
    #[error("Infrastructure error: {0}")]
    InfrastructureError(String),
}

pub const THREAD_NOT_FOUND: &str = "THREAD_NOT_FOUND";
pub const COMMENT_NOT_FOUND: &str = "COMMENT_NOT_FOUND";
pub const REPLY_NOT_FOUND: &str = "REPLY_NOT_FOUND";
pub const NOT_OWNER: &str = "NOT_OWNER";
pub const LIKE_ALREADY_EXISTS: &str = "LIKE_ALREADY_EXISTS";

impl DomainError {
    pub fn not_found(signal: &str) -> Self {
        Self::NotFound(signal.to_string())
    }

    pub fn not_owner() -> Self {
        Self::Unauthorized(NOT_OWNER.to_string())
    }

    /// Signal for a repository capability the collaborator does not provide.
    pub fn not_implemented(repository: &str) -> Self {
        Self::NotImplemented(format!("{repository}.METHOD_NOT_IMPLEMENTED"))
    }

    pub fn infrastructure<E: std::fmt::Display>(err: E) -> Self {
        Self::InfrastructureError(err.to_string())
    }

    /// The stable signal string carried by this error.
    pub fn signal(&self) -> &str {
        match self {
            Self::ValidationError(s)
            | Self::NotFound(s)
            | Self::Unauthorized(s)
            | Self::Conflict(s)
            | Self::NotImplemented(s)
            | Self::InfrastructureError(s) => s,
        }
    }
}

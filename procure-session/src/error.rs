//! Error types for session handling.

use procure_model::Role;
use thiserror::Error;

/// Session-specific errors.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No session is stored; the user must log in.
    #[error("not logged in")]
    NotLoggedIn,

    /// The signed-in user lacks the role an action needs.
    #[error("forbidden: {0} role required")]
    Forbidden(Role),

    /// Stored session data is present but unusable.
    #[error("invalid session: {0}")]
    Invalid(String),

    /// No platform configuration directory to store the session in.
    #[error("no configuration directory available for session storage")]
    NoConfigDir,

    /// Storage error.
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

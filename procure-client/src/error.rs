//! Error types for backend calls.

use procure_model::ModelError;
use procure_session::SessionError;
use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors returned by [`crate::ApiClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// The call needs a session and the client has none.
    #[error("not logged in")]
    NotLoggedIn,

    /// The backend rejected the bearer token (HTTP 401).
    #[error("session expired or invalid, log in again")]
    Unauthorized,

    /// HTTP 403.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// HTTP 404.
    #[error("not found: {0}")]
    NotFound(String),

    /// Any other non-success response.
    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Network error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body was not the expected JSON.
    #[error("invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Refused locally: invalid status transition or failed validation.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Refused locally: missing role.
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl ClientError {
    /// Whether the stored session should be discarded.
    #[must_use]
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

//! Error types for the entity model.

use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised by model-level checks.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The requested status change is not part of the workflow.
    #[error("invalid transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    /// A status name did not match any known status.
    #[error("unknown status: {0}")]
    UnknownStatus(String),

    /// A role name did not match any known role.
    #[error("unknown role: {0}")]
    UnknownRole(String),

    /// A new entity failed validation.
    #[error("invalid {entity}: {reason}")]
    Invalid { entity: &'static str, reason: String },

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ModelError {
    pub(crate) fn invalid(entity: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            entity,
            reason: reason.into(),
        }
    }
}

//! Signed-in user context for Procure.
//!
//! This crate handles:
//! - The [`Session`] of the signed-in user (id, display name, bearer token, roles)
//! - Role checks and the landing route each role starts on
//! - Persisting the session between runs with [`SessionStore`]
//!
//! # Design Principles
//!
//! - **Explicit context**: code that needs the user receives a `&Session`;
//!   nothing reads session data from storage on its own
//! - **Typed roles**: role checks use [`procure_model::Role`], never strings
//! - **Token hygiene**: the bearer token never appears in `Debug` output

mod error;
mod session;
mod store;

pub use error::{SessionError, SessionResult};
pub use session::Session;
pub use store::{SessionStore, SESSION_FILE_NAME};

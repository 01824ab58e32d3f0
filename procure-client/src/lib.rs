//! HTTP client for the Procure procurement backend.
//!
//! [`ApiClient`] wraps the backend's JSON endpoints for proposals, purchase
//! orders, users, roles, departments, funding sources and budget
//! preferences. When a [`procure_session::Session`] is attached its token is
//! sent as `Authorization: Bearer <token>`.
//!
//! Role-gated calls (approving, ordering, administration) check the session
//! locally first and refuse with [`ClientError::Session`] before any request
//! is made; status changes are checked against the workflow in
//! [`procure_model`] the same way. The backend stays authoritative.

mod admin;
mod auth;
mod client;
mod error;
mod orders;
mod proposals;

pub use auth::LoginResponse;
pub use client::ApiClient;
pub use error::{ClientError, ClientResult};

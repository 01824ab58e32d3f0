use crate::client::ApiClient;
use crate::error::ClientResult;
use procure_model::User;
use procure_session::Session;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Body returned by `POST /auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

impl ApiClient {
    /// Logs in and attaches the resulting session to this client.
    pub async fn login(&mut self, email: &str, password: &str) -> ClientResult<Session> {
        let response: LoginResponse = self.post("/auth/login", &LoginRequest { email, password }).await?;
        let session = Session::for_user(&response.user, response.token);
        info!("Logged in as {} (user {})", session.name, session.user_id);
        self.session = Some(session.clone());
        Ok(session)
    }

    /// Drops the attached session. The backend keeps no login state to clear.
    pub fn logout(&mut self) {
        self.session = None;
    }
}

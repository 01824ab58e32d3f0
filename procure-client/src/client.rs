use crate::error::{ClientError, ClientResult};
use procure_model::Role;
use procure_session::Session;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("procure/", env!("CARGO_PKG_VERSION"));

/// JSON-over-HTTP client for the procurement backend.
///
/// Cloning is cheap and shares the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    pub(crate) session: Option<Session>,
}

impl ApiClient {
    /// Creates a client for the API rooted at `base_url` (e.g. `https://procure.example.edu/api`).
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session: None,
        })
    }

    /// Attaches a session; its token is sent as a bearer token on every call.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn require_session(&self) -> ClientResult<&Session> {
        self.session.as_ref().ok_or(ClientError::NotLoggedIn)
    }

    pub(crate) fn require_role(&self, role: Role) -> ClientResult<&Session> {
        let session = self.require_session()?;
        session.authorize(role)?;
        Ok(session)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);
        let builder = self.http.request(method, url);
        match &self.session {
            Some(session) => builder.bearer_auth(session.token()),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> ClientResult<Response> {
        let response = builder.send().await?;
        check_status(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.send(self.request(Method::GET, path)).await?;
        Self::decode(response).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(self.request(Method::POST, path).json(body)).await?;
        Self::decode(response).await
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(self.request(Method::PUT, path).json(body)).await?;
        Self::decode(response).await
    }

    /// DELETE; any response body is ignored.
    pub(crate) async fn delete(&self, path: &str) -> ClientResult<()> {
        self.send(self.request(Method::DELETE, path)).await?;
        Ok(())
    }
}

async fn check_status(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = error_message(&body)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());

    Err(match status {
        StatusCode::UNAUTHORIZED => {
            warn!("Backend rejected credentials: {}", message);
            ClientError::Unauthorized
        }
        StatusCode::FORBIDDEN => ClientError::Forbidden(message),
        StatusCode::NOT_FOUND => ClientError::NotFound(message),
        _ => ClientError::Api {
            status: status.as_u16(),
            message,
        },
    })
}

/// Pulls a human-readable message out of an error body: `{"message": ..}`,
/// `{"error": ..}`, or the raw text.
fn error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(json) => ["message", "error", "detail"]
            .iter()
            .find_map(|field| json.get(*field).and_then(Value::as_str))
            .map(String::from),
        Err(_) => Some(trimmed.to_string()),
    }
}

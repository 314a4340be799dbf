//! REST API client for the auth backend.
//!
//! ERROR HANDLING
//! ==============
//! Server failures carry a `{"message": ...}` body; that message is what
//! callers (and ultimately the notification collaborator) should see. A
//! body that does not parse falls back to a generic message rather than
//! surfacing transport internals.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub(crate) const FALLBACK_MESSAGE: &str = "An error occurred";

/// Public view of a user as returned by the server. Wire names are
/// camelCase; the credential never appears.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: String,
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub email_domain: String,
    pub phone: String,
    pub age: u32,
}

/// Signup form data as submitted.
#[derive(Debug, Clone, Serialize)]
pub struct SignupData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: u32,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with an error `{"message"}` body.
    #[error("{0}")]
    Api(String),
    #[error("network error: {0}")]
    Network(String),
}

/// The auth backend's network contract: sign-up, sign-in, sign-out, and
/// get-session. Trait-shaped so state machinery can be tested against a
/// mock transport.
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn signup(&self, data: &SignupData) -> Result<PublicUser, ApiError>;
    async fn login(&self, email: &str, password: &str) -> Result<PublicUser, ApiError>;
    async fn logout(&self) -> Result<(), ApiError>;
    async fn me(&self) -> Result<PublicUser, ApiError>;
}

/// Extract the server's error message from a response body.
pub(crate) fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message")?.as_str().map(ToOwned::to_owned))
        .unwrap_or_else(|| FALLBACK_MESSAGE.to_owned())
}

/// HTTP implementation over reqwest. The cookie store holds the session
/// cookie between calls, mirroring a browser with `withCredentials`.
pub struct HttpAuthApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpAuthApi {
    /// Build a client for the given base URL (e.g. `http://localhost:3001`).
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Network` if the underlying client fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let base_url: String = base_url.into();
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn read_user(response: reqwest::Response) -> Result<PublicUser, ApiError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !status.is_success() {
            return Err(ApiError::Api(error_message(&body)));
        }
        serde_json::from_str(&body).map_err(|e| ApiError::Network(e.to_string()))
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn signup(&self, data: &SignupData) -> Result<PublicUser, ApiError> {
        let response = self
            .http
            .post(self.url("/signup"))
            .json(data)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read_user(response).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<PublicUser, ApiError> {
        let response = self
            .http
            .post(self.url("/login"))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read_user(response).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url("/logout"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Api(error_message(&body)))
    }

    async fn me(&self) -> Result<PublicUser, ApiError> {
        let response = self
            .http
            .get(self.url("/me"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read_user(response).await
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;

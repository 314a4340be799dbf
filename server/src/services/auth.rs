//! Auth orchestration — signup, login, profile fetch, logout.
//!
//! ARCHITECTURE
//! ============
//! `AuthService` wires the validator, user store, field parser, and session
//! manager together. Route handlers translate its error taxonomy into
//! status codes; nothing here knows about HTTP.

use std::sync::Arc;

use serde::Deserialize;

use crate::services::password;
use crate::services::session::SessionManager;
use crate::services::store::{StoreError, UserStore};
use crate::services::user::{PublicUser, UserRecord};
use crate::services::validate::{self, ValidationError};

/// Raw signup form body. Fields default to empty so presence checks live
/// in the validator, not in serde rejections; `age` stays a JSON value to
/// distinguish "missing" from "not a number".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignupPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub age: Option<serde_json::Value>,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginPayload {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("Email already registered")]
    Conflict,
    /// Collapses "no such user" and "wrong password" so responses cannot
    /// be used to enumerate registered emails.
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Not authenticated")]
    Unauthenticated,
    #[error("User not found")]
    NotFound,
    #[error("Internal server error")]
    Internal(String),
}

/// Orchestrator for the session-backed auth flow.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn UserStore>,
    sessions: SessionManager,
}

impl AuthService {
    #[must_use]
    pub fn new(store: Arc<dyn UserStore>, sessions: SessionManager) -> Self {
        Self { store, sessions }
    }

    /// Register a new user and issue a session.
    ///
    /// # Errors
    ///
    /// `Validation` for malformed input, `Conflict` for a taken email.
    pub async fn signup(&self, payload: SignupPayload) -> Result<(PublicUser, String), AuthError> {
        let age = validate::validate_signup(&payload)?;

        // Friendly pre-check; `insert` re-checks under its lock, so a
        // concurrent racer still loses with the same Conflict.
        if self.store.find_by_email(&payload.email).await.is_some() {
            return Err(AuthError::Conflict);
        }

        let record = UserRecord::new(
            payload.name,
            payload.email,
            payload.phone,
            age,
            password::hash_password(&payload.password),
        );
        let record = match self.store.insert(record).await {
            Ok(record) => record,
            Err(StoreError::DuplicateEmail) => return Err(AuthError::Conflict),
        };

        let token = self.sessions.create(record.id);
        tracing::info!(user_id = %record.id, "user signed up");
        Ok((record.public(), token))
    }

    /// Verify credentials and issue a session.
    ///
    /// # Errors
    ///
    /// `Validation` for missing fields, `InvalidCredentials` for an
    /// unknown email or wrong password (deliberately indistinguishable).
    pub async fn login(&self, payload: LoginPayload) -> Result<(PublicUser, String), AuthError> {
        validate::validate_login(&payload)?;

        let Some(user) = self.store.find_by_email(&payload.email).await else {
            return Err(AuthError::InvalidCredentials);
        };
        let ok = password::verify_password(&payload.password, &user.password_hash)
            .map_err(|e| AuthError::Internal(e.to_string()))?;
        if !ok {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.sessions.create(user.id);
        Ok((user.public(), token))
    }

    /// Fetch the profile bound to a session token.
    ///
    /// # Errors
    ///
    /// `Unauthenticated` for an empty, unknown, or expired token;
    /// `NotFound` if the user record vanished (defensive — the store has
    /// no delete path).
    pub async fn profile(&self, token: &str) -> Result<PublicUser, AuthError> {
        if token.is_empty() {
            return Err(AuthError::Unauthenticated);
        }
        let user_id = self.sessions.resolve(token).ok_or(AuthError::Unauthenticated)?;
        let user = self.store.find_by_id(user_id).await.ok_or(AuthError::NotFound)?;
        Ok(user.public())
    }

    /// Destroy the session unconditionally. Always succeeds.
    pub fn logout(&self, token: &str) {
        self.sessions.destroy(token);
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;

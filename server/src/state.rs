//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! All state lives in memory for the process lifetime: the user store and
//! session map sit behind the auth service, which is Arc-backed and Clone.

use std::sync::Arc;

use crate::services::auth::AuthService;
use crate::services::session::SessionManager;
use crate::services::store::InMemoryUserStore;

/// Shared application state, injected into Axum handlers via State
/// extractor. Clone is required by Axum — inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(InMemoryUserStore::new());
        let auth = AuthService::new(store, SessionManager::new());
        Self { auth }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fresh_state_has_no_users() {
        let state = test_helpers::test_app_state();
        let user = state.auth.login(test_helpers::sample_login()).await;
        assert!(user.is_err());
    }

    #[tokio::test]
    async fn state_clones_share_users_and_sessions() {
        let state = test_helpers::test_app_state();
        let clone = state.clone();

        let (_, token) = state
            .auth
            .signup(test_helpers::sample_signup())
            .await
            .expect("signup should succeed");

        // The clone sees both the session and the user record.
        let profile = clone.auth.profile(&token).await.expect("profile via clone");
        assert_eq!(profile.email, "jane@example.com");
    }
}

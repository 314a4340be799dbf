//! Client auth session — the frontend's authentication state holder.
//!
//! DESIGN
//! ======
//! A small phase machine: `Unknown` before the first session check, then
//! `Checking` around every network round trip, settling in
//! `Authenticated` or `Unauthenticated`. Rendering, routing, and toast
//! display are external collaborators; this module only drives state and
//! reports outcomes through the `Navigator`/`Notifier` seams.
//!
//! TRADE-OFFS
//! ==========
//! Calls mutate `&mut self`, so a caller cannot overlap two transitions on
//! one session; `is_loading` exists so a UI can also disable submission
//! while a round trip is in flight. A rapid double submit from two clones
//! is tolerated — the server's email uniqueness makes it harmless.

use std::sync::Arc;

use crate::api::{ApiError, AuthApi, PublicUser, SignupData};

/// Routing collaborator: where to send the user after a transition.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Notification collaborator for transient success/error toasts.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Authentication phase. `Unknown` and `Checking` both read as loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthPhase {
    Unknown,
    Checking,
    Authenticated(PublicUser),
    Unauthenticated,
}

pub struct AuthSession {
    api: Arc<dyn AuthApi>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    phase: AuthPhase,
}

impl AuthSession {
    #[must_use]
    pub fn new(api: Arc<dyn AuthApi>, navigator: Arc<dyn Navigator>, notifier: Arc<dyn Notifier>) -> Self {
        Self { api, navigator, notifier, phase: AuthPhase::Unknown }
    }

    #[must_use]
    pub fn phase(&self) -> &AuthPhase {
        &self.phase
    }

    /// The cached public profile, if authenticated.
    #[must_use]
    pub fn current_user(&self) -> Option<&PublicUser> {
        match &self.phase {
            AuthPhase::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    /// True before the first check completes and during every round trip.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, AuthPhase::Unknown | AuthPhase::Checking)
    }

    /// Resolve the current session, typically on mount. An anonymous
    /// visitor is the normal outcome, so failures are not surfaced as
    /// notifications.
    pub async fn check_auth(&mut self) {
        self.phase = AuthPhase::Checking;
        self.phase = match self.api.me().await {
            Ok(user) => AuthPhase::Authenticated(user),
            Err(_) => AuthPhase::Unauthenticated,
        };
    }

    /// Sign in. On success the profile page is next; on failure the error
    /// is surfaced and no partial user state is kept.
    pub async fn login(&mut self, email: &str, password: &str) {
        self.phase = AuthPhase::Checking;
        let result = self.api.login(email, password).await;
        self.settle_signin(result, "Logged in successfully");
    }

    /// Register a new account; same shape as [`AuthSession::login`].
    pub async fn signup(&mut self, data: &SignupData) {
        self.phase = AuthPhase::Checking;
        let result = self.api.signup(data).await;
        self.settle_signin(result, "Signed up successfully");
    }

    /// Sign out. The local session always ends, even if the network call
    /// fails — the server-side destroy is idempotent and a stale session
    /// expires on its own.
    pub async fn logout(&mut self) {
        self.phase = AuthPhase::Checking;
        let result = self.api.logout().await;
        self.phase = AuthPhase::Unauthenticated;
        match result {
            Ok(()) => self.notifier.success("Logged out successfully"),
            Err(e) => self.notifier.error(&e.to_string()),
        }
        self.navigator.navigate("/login");
    }

    fn settle_signin(&mut self, result: Result<PublicUser, ApiError>, toast: &str) {
        match result {
            Ok(user) => {
                self.phase = AuthPhase::Authenticated(user);
                self.notifier.success(toast);
                self.navigator.navigate("/profile");
            }
            Err(e) => {
                self.phase = AuthPhase::Unauthenticated;
                self.notifier.error(&e.to_string());
            }
        }
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

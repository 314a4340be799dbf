//! Native client for the session-backed auth API.
//!
//! ARCHITECTURE
//! ============
//! `api` speaks the HTTP contract (reqwest with a cookie store, so the
//! session cookie rides along automatically). `session` is the auth state
//! holder the rest of a client hangs off: a small phase machine that calls
//! the API and reports outcomes through pluggable navigation/notification
//! collaborators.

pub mod api;
pub mod session;

pub use api::{ApiError, AuthApi, HttpAuthApi, PublicUser, SignupData};
pub use session::{AuthPhase, AuthSession, Navigator, Notifier};

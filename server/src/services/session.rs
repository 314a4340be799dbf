//! Session token management.
//!
//! ARCHITECTURE
//! ============
//! An opaque random token (delivered via cookie) maps to a user id with an
//! absolute 24-hour expiry matching the cookie max-age. Expiry is passive:
//! there is no sweeper task, expired entries are dropped when touched.

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use rand::Rng;
use uuid::Uuid;

const SESSION_TTL: Duration = Duration::from_secs(24 * 60 * 60);

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

struct SessionEntry {
    user_id: Uuid,
    expires_at: Instant,
}

/// In-memory session map. Cheap to clone; all clones share one map.
#[derive(Clone)]
pub struct SessionManager {
    inner: Arc<Mutex<HashMap<String, SessionEntry>>>,
    ttl: Duration,
}

impl SessionManager {
    #[must_use]
    pub fn new() -> Self {
        Self::with_ttl(SESSION_TTL)
    }

    /// Build a manager with a custom time-to-live (used by tests).
    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        Self { inner: Arc::new(Mutex::new(HashMap::new())), ttl }
    }

    /// Create a session bound to `user_id`, returning the fresh token.
    pub fn create(&self, user_id: Uuid) -> String {
        let token = generate_token();
        let entry = SessionEntry { user_id, expires_at: Instant::now() + self.ttl };
        let mut sessions = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        sessions.insert(token.clone(), entry);
        token
    }

    /// Resolve a token to its user id. Unknown and expired tokens both
    /// read as "not authenticated"; expired entries are removed here.
    pub fn resolve(&self, token: &str) -> Option<Uuid> {
        let mut sessions = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let entry = sessions.get(token)?;
        if entry.expires_at <= Instant::now() {
            sessions.remove(token);
            return None;
        }
        Some(entry.user_id)
    }

    /// Remove a session. Idempotent: destroying an unknown token is fine.
    pub fn destroy(&self, token: &str) {
        let mut sessions = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        sessions.remove(token);
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

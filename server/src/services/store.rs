//! User repository — trait seam plus the in-memory implementation.
//!
//! DESIGN
//! ======
//! The store is the sole mutation point for user records, so `insert` owns
//! the duplicate-email check: check and insert happen under one lock, and
//! two concurrent signups with the same email cannot both succeed. The
//! trait keeps the persistence seam open — a database-backed store can
//! replace `InMemoryUserStore` without touching the auth service.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::services::user::UserRecord;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Email already registered")]
    DuplicateEmail,
}

#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a record, enforcing email uniqueness atomically.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateEmail`] if the email is taken.
    async fn insert(&self, record: UserRecord) -> Result<UserRecord, StoreError>;

    /// Exact-match lookup by email (case-sensitive as submitted).
    async fn find_by_email(&self, email: &str) -> Option<UserRecord>;

    async fn find_by_id(&self, id: Uuid) -> Option<UserRecord>;
}

struct Inner {
    by_id: HashMap<Uuid, UserRecord>,
    /// Email → user id index for O(1) duplicate checks and login lookups.
    email_index: HashMap<String, Uuid>,
}

/// Process-lifetime user store backed by a mutex-guarded map.
#[derive(Clone)]
pub struct InMemoryUserStore {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryUserStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner { by_id: HashMap::new(), email_index: HashMap::new() })),
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(&self, record: UserRecord) -> Result<UserRecord, StoreError> {
        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if inner.email_index.contains_key(&record.email) {
            return Err(StoreError::DuplicateEmail);
        }
        inner.email_index.insert(record.email.clone(), record.id);
        inner.by_id.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_by_email(&self, email: &str) -> Option<UserRecord> {
        let inner = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let id = inner.email_index.get(email)?;
        inner.by_id.get(id).cloned()
    }

    async fn find_by_id(&self, id: Uuid) -> Option<UserRecord> {
        let inner = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        inner.by_id.get(&id).cloned()
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;

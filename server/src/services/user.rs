//! User record model and derived-field parsing.

use serde::Serialize;
use uuid::Uuid;

/// Fields computed from raw signup input rather than supplied directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedFields {
    pub first_name: String,
    pub last_name: String,
    pub email_domain: String,
}

/// Derive `first_name`, `last_name`, and `email_domain` from a raw display
/// name and email address.
///
/// The name splits on whitespace: first token becomes `first_name`, the
/// remaining tokens joined with single spaces become `last_name`. The
/// email domain is everything after the first `@`. Degenerate input
/// (empty name, email without `@`) yields empty strings — this never fails.
#[must_use]
pub fn derive_fields(name: &str, email: &str) -> DerivedFields {
    let mut tokens = name.split_whitespace();
    let first_name = tokens.next().unwrap_or_default().to_owned();
    let last_name = tokens.collect::<Vec<_>>().join(" ");
    let email_domain = email
        .split_once('@')
        .map(|(_, domain)| domain.to_owned())
        .unwrap_or_default();
    DerivedFields { first_name, last_name, email_domain }
}

/// A registered user as held by the store. Immutable after creation.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub email_domain: String,
    pub phone: String,
    pub age: u32,
    /// Salted credential digest, never the raw password.
    pub password_hash: String,
}

impl UserRecord {
    /// Build a record with a fresh id and derived fields.
    #[must_use]
    pub fn new(name: String, email: String, phone: String, age: u32, password_hash: String) -> Self {
        let derived = derive_fields(&name, &email);
        Self {
            id: Uuid::new_v4(),
            name,
            first_name: derived.first_name,
            last_name: derived.last_name,
            email,
            email_domain: derived.email_domain,
            phone,
            age,
            password_hash,
        }
    }

    /// Projection returned to clients — everything except the credential.
    #[must_use]
    pub fn public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            name: self.name.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            email_domain: self.email_domain.clone(),
            phone: self.phone.clone(),
            age: self.age,
        }
    }
}

/// Public view of a user. Wire names stay camelCase for compatibility
/// with the original JSON contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub email_domain: String,
    pub phone: String,
    pub age: u32,
}

#[cfg(test)]
#[path = "user_test.rs"]
mod tests;

//! Salted credential hashing.
//!
//! Stored format is `salt_hex:digest_hex` with a fresh 16-byte salt per
//! user and a SHA-256 digest over `salt || password`. Verification
//! recomputes the digest and compares in constant time.

use rand::Rng;
use sha2::{Digest, Sha256};

use crate::services::session::bytes_to_hex;

const SALT_LEN: usize = 16;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PasswordError {
    /// The stored credential does not parse as `salt:digest`.
    #[error("malformed stored credential")]
    Malformed,
}

/// Hash a password under a fresh random salt.
#[must_use]
pub fn hash_password(password: &str) -> String {
    let salt: [u8; SALT_LEN] = rand::rng().random();
    let salt_hex = bytes_to_hex(&salt);
    let digest = digest_hex(&salt_hex, password);
    format!("{salt_hex}:{digest}")
}

/// Verify a claimed password against a stored `salt:digest` credential.
///
/// # Errors
///
/// Returns [`PasswordError::Malformed`] if the stored value is not in the
/// expected format — that is store corruption, not a wrong password.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, PasswordError> {
    let Some((salt_hex, digest)) = stored.split_once(':') else {
        return Err(PasswordError::Malformed);
    };
    if salt_hex.len() != SALT_LEN * 2 || digest.len() != Sha256::output_size() * 2 {
        return Err(PasswordError::Malformed);
    }
    let claimed = digest_hex(salt_hex, password);
    Ok(constant_time_eq(claimed.as_bytes(), digest.as_bytes()))
}

fn digest_hex(salt_hex: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt_hex.as_bytes());
    hasher.update(password.as_bytes());
    bytes_to_hex(&hasher.finalize())
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
#[path = "password_test.rs"]
mod tests;

//! Signup and login input validation.
//!
//! Pure predicate functions plus a payload-level check that reports the
//! first failing reason. Messages are part of the HTTP contract, so they
//! stay word-for-word stable.

use crate::services::auth::{LoginPayload, SignupPayload};

pub const MIN_AGE: u64 = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingFields,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Invalid phone number format")]
    InvalidPhone,
    #[error("Age must be a number and at least 13")]
    InvalidAge,
    #[error("Email and password are required")]
    MissingCredentials,
}

/// Check an email address shape: exactly one `@`, no whitespace, non-empty
/// local part, and a domain containing an interior dot (`a@b.c`).
#[must_use]
pub fn is_valid_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = s.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    // The dot must have at least one character on each side.
    let bytes = domain.as_bytes();
    bytes.len() >= 3 && bytes[1..bytes.len() - 1].contains(&b'.')
}

/// Check a phone number shape: an optional `+` country code of 1–3 digits
/// (optionally followed by a single `-` or space), then exactly ten digits.
#[must_use]
pub fn is_valid_phone(s: &str) -> bool {
    let Some(rest) = s.strip_prefix('+') else {
        return is_exactly_digits(s, 10);
    };
    let code_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if code_len == 0 {
        return false;
    }
    // Greedy country code with backtracking: any split leaving ten digits
    // for the subscriber number is acceptable.
    for take in (1..=code_len.min(3)).rev() {
        let tail = &rest[take..];
        let tail = tail
            .strip_prefix('-')
            .or_else(|| tail.strip_prefix(' '))
            .unwrap_or(tail);
        if is_exactly_digits(tail, 10) {
            return true;
        }
    }
    false
}

fn is_exactly_digits(s: &str, n: usize) -> bool {
    s.len() == n && s.bytes().all(|b| b.is_ascii_digit())
}

/// Validate a signup payload, returning the parsed age.
///
/// Checks run in the same order as the original middleware: field
/// presence, email shape, phone shape, age bound.
///
/// # Errors
///
/// Returns the first failing [`ValidationError`].
pub fn validate_signup(payload: &SignupPayload) -> Result<u32, ValidationError> {
    if payload.name.is_empty()
        || payload.email.is_empty()
        || payload.phone.is_empty()
        || payload.password.is_empty()
        || payload.age.is_none()
    {
        return Err(ValidationError::MissingFields);
    }
    if !is_valid_email(&payload.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if !is_valid_phone(&payload.phone) {
        return Err(ValidationError::InvalidPhone);
    }
    // `age` must be a non-negative integer; a JSON null or string lands
    // here rather than in the presence check, like the original's
    // `typeof age !== "number"` branch.
    let age = payload
        .age
        .as_ref()
        .and_then(serde_json::Value::as_u64)
        .filter(|age| *age >= MIN_AGE)
        .ok_or(ValidationError::InvalidAge)?;
    u32::try_from(age).map_err(|_| ValidationError::InvalidAge)
}

/// Validate a login payload: both fields must be present.
///
/// # Errors
///
/// Returns `MissingCredentials` if either field is empty.
pub fn validate_login(payload: &LoginPayload) -> Result<(), ValidationError> {
    if payload.email.is_empty() || payload.password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(())
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;

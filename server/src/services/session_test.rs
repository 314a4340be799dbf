use super::*;

// =============================================================================
// bytes_to_hex / generate_token
// =============================================================================

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn bytes_to_hex_pads_and_concatenates() {
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_two_calls_differ() {
    assert_ne!(generate_token(), generate_token());
}

// =============================================================================
// SessionManager
// =============================================================================

#[test]
fn create_then_resolve_round_trip() {
    let sessions = SessionManager::new();
    let user_id = Uuid::new_v4();
    let token = sessions.create(user_id);
    assert_eq!(sessions.resolve(&token), Some(user_id));
}

#[test]
fn resolve_unknown_token_is_none() {
    let sessions = SessionManager::new();
    assert_eq!(sessions.resolve("nope"), None);
    assert_eq!(sessions.resolve(""), None);
}

#[test]
fn sessions_are_independent_per_token() {
    let sessions = SessionManager::new();
    let (alice, bob) = (Uuid::new_v4(), Uuid::new_v4());
    let alice_token = sessions.create(alice);
    let bob_token = sessions.create(bob);

    sessions.destroy(&alice_token);
    assert_eq!(sessions.resolve(&alice_token), None);
    assert_eq!(sessions.resolve(&bob_token), Some(bob));
}

#[test]
fn destroy_is_idempotent() {
    let sessions = SessionManager::new();
    let token = sessions.create(Uuid::new_v4());
    sessions.destroy(&token);
    sessions.destroy(&token);
    sessions.destroy("never-existed");
    assert_eq!(sessions.resolve(&token), None);
}

#[test]
fn expired_session_reads_as_unauthenticated() {
    let sessions = SessionManager::with_ttl(Duration::ZERO);
    let token = sessions.create(Uuid::new_v4());
    assert_eq!(sessions.resolve(&token), None);
}

#[test]
fn expired_entry_is_removed_on_read() {
    let sessions = SessionManager::with_ttl(Duration::ZERO);
    let token = sessions.create(Uuid::new_v4());
    assert_eq!(sessions.len(), 1);
    let _ = sessions.resolve(&token);
    assert_eq!(sessions.len(), 0);
}

#[test]
fn destroying_a_session_never_touches_another_binding() {
    let sessions = SessionManager::new();
    let user_id = Uuid::new_v4();
    let first = sessions.create(user_id);
    let second = sessions.create(user_id);
    sessions.destroy(&first);
    // Same user, separate token: still valid.
    assert_eq!(sessions.resolve(&second), Some(user_id));
}

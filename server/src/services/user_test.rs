use super::*;

// =============================================================================
// derive_fields
// =============================================================================

#[test]
fn two_token_name_splits_first_last() {
    let d = derive_fields("Jane Doe", "jane@example.com");
    assert_eq!(d.first_name, "Jane");
    assert_eq!(d.last_name, "Doe");
    assert_eq!(d.email_domain, "example.com");
}

#[test]
fn single_token_name_has_empty_last_name() {
    let d = derive_fields("Cher", "cher@example.com");
    assert_eq!(d.first_name, "Cher");
    assert_eq!(d.last_name, "");
}

#[test]
fn extra_tokens_join_with_single_spaces() {
    let d = derive_fields("Mary Jane Watson Parker", "mj@example.com");
    assert_eq!(d.first_name, "Mary");
    assert_eq!(d.last_name, "Jane Watson Parker");
}

#[test]
fn surrounding_and_repeated_whitespace_collapses() {
    let d = derive_fields("  Jane \t  Doe  ", "jane@example.com");
    assert_eq!(d.first_name, "Jane");
    assert_eq!(d.last_name, "Doe");
}

#[test]
fn empty_name_yields_empty_fields() {
    let d = derive_fields("", "jane@example.com");
    assert_eq!(d.first_name, "");
    assert_eq!(d.last_name, "");
}

#[test]
fn domain_is_substring_after_first_at() {
    assert_eq!(derive_fields("J", "weird@a@b.com").email_domain, "a@b.com");
}

#[test]
fn email_without_at_yields_empty_domain() {
    assert_eq!(derive_fields("J", "not-an-email").email_domain, "");
}

// =============================================================================
// UserRecord / PublicUser
// =============================================================================

fn record() -> UserRecord {
    UserRecord::new(
        "Jane Doe".into(),
        "jane@example.com".into(),
        "1234567890".into(),
        30,
        "salt:digest".into(),
    )
}

#[test]
fn new_record_derives_fields_and_fresh_id() {
    let a = record();
    let b = record();
    assert_eq!(a.first_name, "Jane");
    assert_eq!(a.last_name, "Doe");
    assert_eq!(a.email_domain, "example.com");
    assert_ne!(a.id, b.id);
}

#[test]
fn public_view_carries_all_non_secret_fields() {
    let r = record();
    let p = r.public();
    assert_eq!(p.id, r.id);
    assert_eq!(p.name, "Jane Doe");
    assert_eq!(p.first_name, "Jane");
    assert_eq!(p.last_name, "Doe");
    assert_eq!(p.email, "jane@example.com");
    assert_eq!(p.email_domain, "example.com");
    assert_eq!(p.phone, "1234567890");
    assert_eq!(p.age, 30);
}

#[test]
fn public_view_serializes_camel_case_without_password() {
    let json = serde_json::to_value(record().public()).unwrap();
    let obj = json.as_object().unwrap();
    for key in ["id", "name", "firstName", "lastName", "email", "emailDomain", "phone", "age"] {
        assert!(obj.contains_key(key), "missing {key}");
    }
    assert_eq!(obj.len(), 8);
    assert!(!json.to_string().to_lowercase().contains("password"));
}

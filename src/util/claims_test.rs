use super::*;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

// =============================================================
// Helpers
// =============================================================

/// Build a structurally valid credential around `payload_json`.
fn make_credential(payload_json: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(payload_json.as_bytes());
    format!("{header}.{payload}.signature")
}

// =============================================================
// Successful decode
// =============================================================

#[test]
fn decodes_customer_claims() {
    let credential = make_credential(r#"{"sub": "alice@example.com", "role": "CUSTOMER"}"#);
    let claims = decode(&credential).unwrap();
    assert_eq!(claims.sub, "alice@example.com");
    assert_eq!(claims.role, Role::Customer);
}

#[test]
fn decodes_admin_claims() {
    let credential = make_credential(r#"{"sub": "root@example.com", "role": "ADMIN"}"#);
    let claims = decode(&credential).unwrap();
    assert_eq!(claims.role, Role::Admin);
}

#[test]
fn decodes_legacy_user_role_spelling() {
    let credential = make_credential(r#"{"sub": "alice@example.com", "role": "USER"}"#);
    assert_eq!(decode(&credential).unwrap().role, Role::Customer);
}

#[test]
fn ignores_extra_claims() {
    let credential = make_credential(r#"{"sub": "alice@example.com", "role": "ADMIN", "exp": 1999999999}"#);
    let claims = decode(&credential).unwrap();
    assert_eq!(claims.sub, "alice@example.com");
}

#[test]
fn accepts_padded_payload_segment() {
    use base64::engine::general_purpose::URL_SAFE;

    let payload = URL_SAFE.encode(br#"{"sub": "bob@example.com", "role": "CUSTOMER"}"#);
    assert!(payload.ends_with('='));
    let credential = format!("header.{payload}.signature");
    assert_eq!(decode(&credential).unwrap().sub, "bob@example.com");
}

// =============================================================
// Structural failures
// =============================================================

#[test]
fn rejects_empty_credential() {
    assert_eq!(decode("").unwrap_err(), DecodeError::Segments);
}

#[test]
fn rejects_two_segments() {
    assert_eq!(decode("aaa.bbb").unwrap_err(), DecodeError::Segments);
}

#[test]
fn rejects_four_segments() {
    assert_eq!(decode("aaa.bbb.ccc.ddd").unwrap_err(), DecodeError::Segments);
}

#[test]
fn rejects_non_base64_payload() {
    assert_eq!(decode("aaa.!!!.ccc").unwrap_err(), DecodeError::Base64);
}

#[test]
fn rejects_non_utf8_payload() {
    let payload = URL_SAFE_NO_PAD.encode([0xff, 0xfe, 0xfd]);
    let credential = format!("aaa.{payload}.ccc");
    assert_eq!(decode(&credential).unwrap_err(), DecodeError::Utf8);
}

// =============================================================
// Claim failures
// =============================================================

#[test]
fn rejects_non_json_payload() {
    let credential = make_credential("not json at all");
    assert!(matches!(decode(&credential).unwrap_err(), DecodeError::Json(_)));
}

#[test]
fn rejects_missing_role_claim() {
    let credential = make_credential(r#"{"sub": "alice@example.com"}"#);
    assert!(matches!(decode(&credential).unwrap_err(), DecodeError::Json(_)));
}

#[test]
fn rejects_unknown_role_value() {
    let credential = make_credential(r#"{"sub": "alice@example.com", "role": "OWNER"}"#);
    assert!(matches!(decode(&credential).unwrap_err(), DecodeError::Json(_)));
}

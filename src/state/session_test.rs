use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_session() -> Session {
    Session {
        email: "alice@example.com".to_owned(),
        role: Role::Customer,
        credential: "aaa.bbb.ccc".to_owned(),
    }
}

// =============================================================
// Role serde
// =============================================================

#[test]
fn role_serializes_to_uppercase() {
    assert_eq!(serde_json::to_string(&Role::Customer).unwrap(), "\"CUSTOMER\"");
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
}

#[test]
fn role_deserializes_from_uppercase() {
    assert_eq!(serde_json::from_str::<Role>("\"CUSTOMER\"").unwrap(), Role::Customer);
    assert_eq!(serde_json::from_str::<Role>("\"ADMIN\"").unwrap(), Role::Admin);
}

#[test]
fn role_accepts_legacy_user_spelling() {
    assert_eq!(serde_json::from_str::<Role>("\"USER\"").unwrap(), Role::Customer);
}

#[test]
fn role_rejects_lowercase() {
    assert!(serde_json::from_str::<Role>("\"admin\"").is_err());
}

#[test]
fn role_admin_check() {
    assert!(Role::Admin.is_admin());
    assert!(!Role::Customer.is_admin());
}

// =============================================================
// Session identity mirror serde
// =============================================================

#[test]
fn session_mirror_omits_credential() {
    let json = serde_json::to_string(&make_session()).unwrap();
    assert!(json.contains("alice@example.com"));
    assert!(json.contains("CUSTOMER"));
    assert!(!json.contains("aaa.bbb.ccc"));
}

#[test]
fn session_mirror_restores_with_empty_credential() {
    let json = r#"{"email": "bob@example.com", "role": "ADMIN"}"#;
    let session: Session = serde_json::from_str(json).unwrap();
    assert_eq!(session.email, "bob@example.com");
    assert_eq!(session.role, Role::Admin);
    assert_eq!(session.credential, "");
}

#[test]
fn session_mirror_accepts_legacy_role_spelling() {
    let json = r#"{"email": "bob@example.com", "role": "USER"}"#;
    let session: Session = serde_json::from_str(json).unwrap();
    assert_eq!(session.role, Role::Customer);
}

// =============================================================
// SessionState transitions
// =============================================================

#[test]
fn state_starts_loading_and_signed_out() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(state.session.is_none());
    assert!(state.credential().is_none());
}

#[test]
fn login_installs_session_and_finishes_loading() {
    let mut state = SessionState::default();
    state.login(make_session());
    assert!(!state.loading);
    assert_eq!(state.session.as_ref().map(|s| s.email.as_str()), Some("alice@example.com"));
    assert_eq!(state.credential().as_deref(), Some("aaa.bbb.ccc"));
}

#[test]
fn logout_clears_session() {
    let mut state = SessionState::default();
    state.login(make_session());
    state.logout();
    assert!(!state.loading);
    assert!(state.session.is_none());
    assert!(state.credential().is_none());
}

#[test]
fn login_replaces_previous_session() {
    let mut state = SessionState::default();
    state.login(make_session());
    state.login(Session {
        email: "root@example.com".to_owned(),
        role: Role::Admin,
        credential: "xxx.yyy.zzz".to_owned(),
    });
    assert_eq!(state.session.as_ref().map(|s| s.role), Some(Role::Admin));
    assert_eq!(state.credential().as_deref(), Some("xxx.yyy.zzz"));
}

// =============================================================
// Restore outside the browser
// =============================================================

#[test]
fn restore_without_storage_is_none() {
    assert!(restore().is_none());
    let state = SessionState::restored();
    assert!(state.session.is_none());
    assert!(!state.loading);
}

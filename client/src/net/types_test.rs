use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Player).unwrap(), "\"player\"");
    assert_eq!(serde_json::to_string(&Role::Watcher).unwrap(), "\"watcher\"");
}

#[test]
fn role_rejects_unknown_tag() {
    assert!(serde_json::from_str::<Role>("\"admin\"").is_err());
    assert_eq!(Role::from_tag("admin"), None);
}

#[test]
fn role_from_tag_matches_as_str() {
    for role in Role::ALL {
        assert_eq!(Role::from_tag(role.as_str()), Some(role));
    }
}

#[test]
fn role_default_is_watcher() {
    assert_eq!(Role::default(), Role::Watcher);
}

#[test]
fn role_display_uses_tag() {
    assert_eq!(Role::Player.to_string(), "player");
}

// =============================================================
// SessionUser
// =============================================================

#[test]
fn session_user_decodes_me_body() {
    let body = r#"{"id":1,"username":"alice","email":"a@x.com","role":"player"}"#;
    let user: SessionUser = serde_json::from_str(body).unwrap();
    assert_eq!(
        user,
        SessionUser {
            id: 1,
            username: "alice".to_owned(),
            email: "a@x.com".to_owned(),
            role: Role::Player,
        }
    );
}

#[test]
fn session_user_missing_field_is_rejected() {
    let body = r#"{"id":1,"username":"alice","role":"player"}"#;
    assert!(serde_json::from_str::<SessionUser>(body).is_err());
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn credentials_body_has_only_email_and_password() {
    let creds = Credentials { email: "a@x.com".to_owned(), password: "pw".to_owned() };
    let value = serde_json::to_value(&creds).unwrap();
    assert_eq!(value, serde_json::json!({"email": "a@x.com", "password": "pw"}));
}

#[test]
fn registration_body_carries_role_tag() {
    let req = RegistrationRequest {
        username: "bob".to_owned(),
        email: "b@x.com".to_owned(),
        password: "pw".to_owned(),
        role: Role::Player,
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"username": "bob", "email": "b@x.com", "password": "pw", "role": "player"})
    );
}

#[test]
fn credentials_debug_hides_password() {
    let creds = Credentials { email: "a@x.com".to_owned(), password: "hunter2".to_owned() };
    let printed = format!("{creds:?}");
    assert!(printed.contains("a@x.com"));
    assert!(printed.contains("<redacted>"));
    assert!(!printed.contains("hunter2"));
}

#[test]
fn registration_debug_hides_password() {
    let req = RegistrationRequest {
        username: "bob".to_owned(),
        email: "b@x.com".to_owned(),
        password: "hunter2".to_owned(),
        role: Role::Player,
    };
    let printed = format!("{req:?}");
    assert!(printed.contains("bob"));
    assert!(printed.contains("Player"));
    assert!(!printed.contains("hunter2"));
}

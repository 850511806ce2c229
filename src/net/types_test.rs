use super::*;
use serde_json::json;

// =============================================================
// UserProfile
// =============================================================

#[test]
fn user_profile_accepts_numeric_id_only() {
    let user: UserProfile = serde_json::from_value(json!({ "id": 1 })).expect("user should parse");
    assert_eq!(user.id, UserId::Number(1));
    assert!(user.name.is_none());
    assert!(user.extra.is_empty());
}

#[test]
fn user_profile_accepts_string_id() {
    let user: UserProfile = serde_json::from_value(json!({ "id": "u-7", "name": "Ada" })).expect("user should parse");
    assert_eq!(user.id, UserId::Text("u-7".to_owned()));
    assert_eq!(user.name.as_deref(), Some("Ada"));
}

#[test]
fn user_profile_keeps_unknown_fields() {
    let raw = json!({ "id": 3, "email": "a@x.com", "role": "student", "cohort": 2024 });
    let user: UserProfile = serde_json::from_value(raw.clone()).expect("user should parse");
    assert_eq!(user.extra.get("role"), Some(&json!("student")));
    assert_eq!(serde_json::to_value(&user).expect("user should serialize"), raw);
}

#[test]
fn user_profile_requires_id() {
    assert!(serde_json::from_value::<UserProfile>(json!({ "name": "Ada" })).is_err());
}

#[test]
fn display_name_prefers_name_then_email_then_id() {
    let mut user: UserProfile =
        serde_json::from_value(json!({ "id": 9, "name": "Ada", "email": "ada@x.com" })).expect("user should parse");
    assert_eq!(user.display_name(), "Ada");
    user.name = None;
    assert_eq!(user.display_name(), "ada@x.com");
    user.email = Some("  ".to_owned());
    assert_eq!(user.display_name(), "9");
}

// =============================================================
// Credentials
// =============================================================

#[test]
fn credentials_debug_redacts_password() {
    let creds = Credentials::new("a@x.com", "hunter2");
    let dbg = format!("{creds:?}");
    assert!(dbg.contains("a@x.com"));
    assert!(!dbg.contains("hunter2"));
}

#[test]
fn credentials_serialize_as_email_and_password() {
    let creds = Credentials::new("a@x.com", "right");
    assert_eq!(
        serde_json::to_value(&creds).expect("credentials should serialize"),
        json!({ "email": "a@x.com", "password": "right" })
    );
}

// =============================================================
// LoginResponse / ErrorBody
// =============================================================

#[test]
fn login_response_parses_token_and_user() {
    let resp: LoginResponse =
        serde_json::from_value(json!({ "token": "t1", "user": { "id": 1 } })).expect("response should parse");
    assert_eq!(resp.token, "t1");
    assert_eq!(resp.user.id, UserId::Number(1));
}

#[test]
fn error_body_message_is_optional() {
    let body: ErrorBody = serde_json::from_str("{}").expect("empty body should parse");
    assert!(body.message.is_none());
    let body: ErrorBody = serde_json::from_str(r#"{"message":"Invalid credentials","code":401}"#)
        .expect("body should parse");
    assert_eq!(body.message.as_deref(), Some("Invalid credentials"));
}

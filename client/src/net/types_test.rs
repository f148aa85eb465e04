use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_parses_upper_case_wire_values() {
    let admin: Role = serde_json::from_str("\"ADMIN\"").unwrap();
    let user: Role = serde_json::from_str("\"USER\"").unwrap();
    assert_eq!(admin, Role::Admin);
    assert_eq!(user, Role::User);
}

#[test]
fn role_rejects_lower_case() {
    assert!(serde_json::from_str::<Role>("\"admin\"").is_err());
}

#[test]
fn role_serializes_upper_case() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
}

// =============================================================
// User
// =============================================================

#[test]
fn user_missing_role_defaults_to_user() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u-1",
        "email": "a@example.com"
    }))
    .unwrap();
    assert_eq!(user.role, Role::User);
    assert_eq!(user.name, None);
}

#[test]
fn user_display_name_prefers_name() {
    let user = User {
        id: "u-1".to_owned(),
        email: "a@example.com".to_owned(),
        role: Role::User,
        name: Some("Ada".to_owned()),
    };
    assert_eq!(user.display_name(), "Ada");
}

#[test]
fn user_display_name_falls_back_to_email_for_blank_name() {
    let user = User {
        id: "u-1".to_owned(),
        email: "a@example.com".to_owned(),
        role: Role::User,
        name: Some("   ".to_owned()),
    };
    assert_eq!(user.display_name(), "a@example.com");
}

#[test]
fn user_without_name_omits_field_when_serialized() {
    let user = User {
        id: "u-1".to_owned(),
        email: "a@example.com".to_owned(),
        role: Role::Admin,
        name: None,
    };
    let value = serde_json::to_value(&user).unwrap();
    assert!(value.get("name").is_none());
    assert_eq!(value["role"], "ADMIN");
}

// =============================================================
// Responses
// =============================================================

#[test]
fn auth_response_parses_token_and_user() {
    let resp: AuthResponse = serde_json::from_value(serde_json::json!({
        "token": "t-123",
        "user": { "id": "u-1", "email": "a@example.com", "role": "ADMIN" }
    }))
    .unwrap();
    assert_eq!(resp.token, "t-123");
    assert_eq!(resp.user.role, Role::Admin);
}

#[test]
fn me_response_accepts_bare_user() {
    let resp: MeResponse =
        serde_json::from_value(serde_json::json!({ "id": "u-1", "email": "a@example.com" })).unwrap();
    assert_eq!(resp.into_user().id, "u-1");
}

#[test]
fn me_response_accepts_wrapped_user() {
    let resp: MeResponse =
        serde_json::from_value(serde_json::json!({ "user": { "id": "u-2", "email": "b@example.com" } })).unwrap();
    assert_eq!(resp.into_user().id, "u-2");
}

#[test]
fn error_body_accepts_message_or_error_key() {
    let a: ErrorBody = serde_json::from_str(r#"{"message":"bad credentials"}"#).unwrap();
    let b: ErrorBody = serde_json::from_str(r#"{"error":"bad credentials"}"#).unwrap();
    assert_eq!(a.into_message().as_deref(), Some("bad credentials"));
    assert_eq!(b.into_message().as_deref(), Some("bad credentials"));
}

#[test]
fn error_body_with_both_keys_prefers_message() {
    let body: ErrorBody =
        serde_json::from_str(r#"{"message":"Invalid credentials","error":"Unauthorized"}"#).unwrap();
    assert_eq!(body.into_message().as_deref(), Some("Invalid credentials"));
}

#[test]
fn error_body_without_text_has_no_message() {
    let body: ErrorBody = serde_json::from_str(r#"{"statusCode":500}"#).unwrap();
    assert_eq!(body.into_message(), None);
}

#[test]
fn register_request_skips_absent_name() {
    let req = RegisterRequest {
        email: "a@example.com".to_owned(),
        password: "secret1".to_owned(),
        name: None,
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value, serde_json::json!({ "email": "a@example.com", "password": "secret1" }));
}

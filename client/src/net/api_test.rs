use super::*;

#[test]
fn endpoint_joins_base_and_path() {
    assert_eq!(endpoint("auth/me"), format!("{API_BASE}/auth/me"));
    assert_eq!(endpoint("/auth/login"), format!("{API_BASE}/auth/login"));
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn status_error_reads_json_message() {
    let err = status_error(401, r#"{"message":"Invalid credentials"}"#);
    assert_eq!(
        err,
        ApiError::Status {
            status: 401,
            message: "Invalid credentials".to_owned()
        }
    );
}

#[test]
fn status_error_reads_json_error_key() {
    let err = status_error(409, r#"{"error":"Email already registered"}"#);
    assert_eq!(err.user_message(), "Email already registered");
}

#[test]
fn status_error_with_message_and_error_keys_uses_message() {
    let err = status_error(401, r#"{"message":"Invalid credentials","error":"Unauthorized"}"#);
    assert_eq!(
        err,
        ApiError::Status {
            status: 401,
            message: "Invalid credentials".to_owned()
        }
    );
}

#[test]
fn status_error_falls_back_to_plain_text() {
    let err = status_error(500, "  upstream exploded \n");
    assert_eq!(
        err,
        ApiError::Status {
            status: 500,
            message: "upstream exploded".to_owned()
        }
    );
}

#[test]
fn user_message_defaults_for_empty_bodies() {
    assert_eq!(status_error(401, "").user_message(), "Invalid email or password.");
    assert_eq!(
        status_error(409, "").user_message(),
        "An account with this email already exists."
    );
    assert_eq!(status_error(502, "").user_message(), "Request failed (502).");
}

#[test]
fn unauthorized_covers_401_and_403_only() {
    assert!(status_error(401, "").is_unauthorized());
    assert!(status_error(403, "").is_unauthorized());
    assert!(!status_error(500, "").is_unauthorized());
    assert!(!ApiError::Network("offline".to_owned()).is_unauthorized());
}

#[test]
fn error_display_includes_status() {
    let err = status_error(418, "teapot");
    assert_eq!(err.to_string(), "request failed (418): teapot");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_outside_browser_are_unavailable() {
    let req = LoginRequest {
        email: "a@example.com".to_owned(),
        password: "secret1".to_owned(),
    };
    let result = futures::executor::block_on(login(&req));
    assert_eq!(result, Err(ApiError::Unavailable));
}

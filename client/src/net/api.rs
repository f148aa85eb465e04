//! REST helpers for the shop's auth API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native builds: every call returns
//! [`ApiError::Unavailable`], since session state only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures surface as [`ApiError`] so pages can show a message and the auth
//! provider can fall back to the unauthenticated state without panicking
//! during hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use super::types::MeResponse;
use super::types::{AuthResponse, LoginRequest, RegisterRequest, User};

/// Base path of the auth API. Overridable at build time so the WASM bundle can
/// target a backend on another origin.
pub const API_BASE: &str = match option_env!("SWEETSHOP_API_BASE") {
    Some(base) => base,
    None => "/api",
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed ({status}): {message}")]
    Status { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// True when the backend rejected the credentials or token.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }

    /// Short message suitable for showing next to a form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { message, .. } if !message.is_empty() => message.clone(),
            Self::Status { status: 401, .. } => "Invalid email or password.".to_owned(),
            Self::Status { status: 409, .. } => "An account with this email already exists.".to_owned(),
            Self::Status { status, .. } => format!("Request failed ({status})."),
            Self::Network(_) => "Could not reach the server.".to_owned(),
            Self::Decode(_) => "The server sent an unexpected response.".to_owned(),
            Self::Unavailable => "Not available right now.".to_owned(),
        }
    }
}

fn endpoint(path: &str) -> String {
    format!("{}/{}", API_BASE.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Build an [`ApiError`] from a non-2xx status and its raw body.
#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<super::types::ErrorBody>(body)
        .ok()
        .and_then(super::types::ErrorBody::into_message)
        .unwrap_or_else(|| body.trim().to_owned());
    ApiError::Status { status, message }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(status_error(status, &body));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Validate a stored token with `GET {base}/auth/me`.
///
/// # Errors
///
/// Returns [`ApiError::Status`] with 401 when the token is no longer valid.
pub async fn fetch_current_user(token: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&endpoint("auth/me"))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json::<MeResponse>(resp).await.map(MeResponse::into_user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, endpoint("auth/me"));
        Err(ApiError::Unavailable)
    }
}

/// Exchange credentials for a session via `POST {base}/auth/login`.
///
/// # Errors
///
/// Returns an error if the request fails or the credentials are rejected.
pub async fn login(request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    post_credentials("auth/login", request).await
}

/// Create an account and session via `POST {base}/auth/register`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend refuses the account.
pub async fn register(request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    post_credentials("auth/register", request).await
}

async fn post_credentials<B: serde::Serialize>(path: &str, body: &B) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint(path))
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json::<AuthResponse>(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint(path), body);
        Err(ApiError::Unavailable)
    }
}

/// Tell the backend to drop the session via `POST {base}/auth/logout`.
/// Best effort: local state is cleared regardless of the outcome.
pub async fn logout(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let result = gloo_net::http::Request::post(&endpoint("auth/logout"))
            .header("Authorization", &bearer(token))
            .send()
            .await;
        if let Err(e) = result {
            log::warn!("logout request failed: {e}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

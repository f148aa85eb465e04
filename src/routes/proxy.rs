//! Forwards `/api/*` requests to the configured shop backend.
//!
//! The browser talks to this server only, so auth calls made by the client
//! (`/api/auth/login`, `/api/auth/me`, ...) arrive here and are replayed
//! against `API_UPSTREAM_URL` with the same method, headers, and body.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, Bytes};
use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::state::AppState;

/// Headers that describe a single hop and must not be replayed.
fn is_hop_by_hop(name: &HeaderName) -> bool {
    [
        header::CONNECTION,
        header::HOST,
        header::PROXY_AUTHENTICATE,
        header::PROXY_AUTHORIZATION,
        header::TE,
        header::TRAILER,
        header::TRANSFER_ENCODING,
        header::UPGRADE,
    ]
    .contains(name)
}

/// Join the upstream base, the captured API path, and the original query.
pub(crate) fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(q) => format!("{base}/{path}?{q}"),
        None => format!("{base}/{path}"),
    }
}

/// Copy end-to-end headers, dropping hop-by-hop ones and `content-length`
/// (recomputed from the forwarded body).
pub(crate) fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if is_hop_by_hop(name) || name == header::CONTENT_LENGTH {
            continue;
        }
        out.append(name.clone(), value.clone());
    }
    out
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

pub async fn forward(
    State(state): State<AppState>,
    Path(path): Path<String>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let Some(base) = state.api_upstream() else {
        return error_response(StatusCode::SERVICE_UNAVAILABLE, "API upstream is not configured");
    };

    let url = upstream_url(base, &path, uri.query());
    tracing::debug!(%method, %url, "forwarding api request");

    let upstream = state
        .http
        .request(method, &url)
        .headers(forwardable_headers(&headers))
        .body(body)
        .send()
        .await;

    let upstream = match upstream {
        Ok(resp) => resp,
        Err(e) => {
            tracing::warn!(error = %e, %url, "api upstream request failed");
            return error_response(StatusCode::BAD_GATEWAY, "API upstream unavailable");
        }
    };

    let status = upstream.status();
    let response_headers = forwardable_headers(upstream.headers());
    match upstream.bytes().await {
        Ok(bytes) => {
            let mut response = Response::new(Body::from(bytes));
            *response.status_mut() = status;
            *response.headers_mut() = response_headers;
            response
        }
        Err(e) => {
            tracing::warn!(error = %e, %url, "api upstream body read failed");
            error_response(StatusCode::BAD_GATEWAY, "API upstream unavailable")
        }
    }
}

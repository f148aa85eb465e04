//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! carries the parsed server configuration and a pooled HTTP client used to
//! forward `/api/*` requests to the shop backend.

use std::sync::Arc;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self { config: Arc::new(config), http: reqwest::Client::new() }
    }

    /// Upstream base URL, when API forwarding is enabled.
    #[must_use]
    pub fn api_upstream(&self) -> Option<&str> {
        self.config.api_upstream.as_deref()
    }
}

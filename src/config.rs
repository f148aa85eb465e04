//! Server configuration parsed from environment variables.
//!
//! Recognised variables:
//! - `PORT`: listen port, default 3000
//! - `API_UPSTREAM_URL`: base URL of the shop backend; `/api/*` is forwarded
//!   there when set
//! - `CORS_ALLOW_ANY`: permissive CORS on the API routes (1/true/yes/on)
//! - `LEPTOS_CONFIG`: manifest carrying `[package.metadata.leptos]`, default
//!   `Cargo.toml`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LEPTOS_CONFIG: &str = "Cargo.toml";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {0:?}")]
    InvalidPort(String),
    #[error("API_UPSTREAM_URL must start with http:// or https://, got {0:?}")]
    InvalidUpstream(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Upstream base URL without a trailing slash.
    pub api_upstream: Option<String>,
    pub cors_allow_any: bool,
    pub leptos_config: String,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error when a set variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error when a present value cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT").map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()) {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let api_upstream = lookup("API_UPSTREAM_URL")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .map(parse_upstream)
            .transpose()?;

        let cors_allow_any = lookup("CORS_ALLOW_ANY")
            .as_deref()
            .and_then(parse_bool)
            .unwrap_or(false);

        let leptos_config = lookup("LEPTOS_CONFIG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LEPTOS_CONFIG.to_owned());

        Ok(Self { port, api_upstream, cors_allow_any, leptos_config })
    }
}

fn parse_upstream(raw: String) -> Result<String, ConfigError> {
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(ConfigError::InvalidUpstream(raw));
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

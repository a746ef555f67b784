//! Client configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:4000";
pub const SESSION_DIR: &str = ".tourdesk";
pub const SESSION_FILE: &str = "session.json";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid API base URL `{0}`: expected an absolute http(s) URL")]
    InvalidApiUrl(String),
    #[error("invalid value `{value}` for {var}: expected a positive number of seconds")]
    InvalidTimeout { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub session_file: PathBuf,
    pub request_timeout: Option<Duration>,
}

impl ClientConfig {
    /// Build typed client config from environment variables.
    ///
    /// Optional:
    /// - `TOURDESK_API_URL`: default `http://localhost:4000`
    /// - `TOURDESK_SESSION_FILE`: default `$HOME/.tourdesk/session.json`
    /// - `TOURDESK_REQUEST_TIMEOUT_SECS`: no timeout when unset
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the URL or timeout is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = std::env::var("TOURDESK_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_owned());
        let session_file = std::env::var_os("TOURDESK_SESSION_FILE")
            .map_or_else(|| default_session_file(std::env::var_os("HOME")), PathBuf::from);
        let timeout_raw = std::env::var("TOURDESK_REQUEST_TIMEOUT_SECS").unwrap_or_default();
        let request_timeout = parse_timeout("TOURDESK_REQUEST_TIMEOUT_SECS", Some(timeout_raw.as_str()))?;

        Ok(Self { api_url: normalize_api_url(&api_url)?, session_file, request_timeout })
    }

    /// Replace the API base URL, validating it the same way as the env var.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiUrl`] if `raw` is not an http(s) URL.
    pub fn with_api_url(mut self, raw: &str) -> Result<Self, ConfigError> {
        self.api_url = normalize_api_url(raw)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_session_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_file = path.into();
        self
    }
}

fn normalize_api_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    match reqwest::Url::parse(trimmed) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(trimmed.to_owned()),
        _ => Err(ConfigError::InvalidApiUrl(raw.to_owned())),
    }
}

fn default_session_file(home: Option<std::ffi::OsString>) -> PathBuf {
    home.map_or_else(|| PathBuf::from("."), PathBuf::from)
        .join(SESSION_DIR)
        .join(SESSION_FILE)
}

fn parse_timeout(var: &'static str, raw: Option<&str>) -> Result<Option<Duration>, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Some(Duration::from_secs(secs))),
        _ => Err(ConfigError::InvalidTimeout { var, value: raw.to_owned() }),
    }
}

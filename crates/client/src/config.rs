//! Backend location and HTTP settings.

use std::time::Duration;

use thiserror::Error;

pub const API_URL_ENV: &str = "FINCATALOG_API_URL";
pub const TIMEOUT_ENV: &str = "FINCATALOG_HTTP_TIMEOUT_SECS";

pub const DEFAULT_API_URL: &str = "http://localhost:3002";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Path of the products resource under the backend origin.
pub const PRODUCTS_PATH: &str = "/bp/products";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be an http(s) URL, got {1:?}")]
    InvalidUrl(&'static str, String),
    #[error("{0} must be a positive number of seconds, got {1:?}")]
    InvalidTimeout(&'static str, String),
}

/// Where the backend lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_url: String,
    timeout: Duration,
}

impl ClientConfig {
    /// `api_url` is the backend origin, e.g. `http://localhost:3002`.
    pub fn new(api_url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = api_url.into();
        let api_url = raw.trim().trim_end_matches('/').to_string();
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl(API_URL_ENV, raw));
        }
        Ok(Self {
            api_url,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read `FINCATALOG_API_URL` / `FINCATALOG_HTTP_TIMEOUT_SECS`, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let config = Self::new(api_url)?;

        match std::env::var(TIMEOUT_ENV) {
            Ok(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .ok_or_else(|| ConfigError::InvalidTimeout(TIMEOUT_ENV, raw.clone()))?;
                Ok(config.with_timeout(Duration::from_secs(secs)))
            }
            Err(_) => Ok(config),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// `{api_url}/bp/products`
    pub fn products_url(&self) -> String {
        format!("{}{}", self.api_url, PRODUCTS_PATH)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_ignored() {
        let config = ClientConfig::new("http://localhost:3002/").unwrap();
        assert_eq!(config.products_url(), "http://localhost:3002/bp/products");
    }

    #[test]
    fn rejects_non_http_urls() {
        let err = ClientConfig::new("localhost:3002").unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidUrl(API_URL_ENV, "localhost:3002".to_string())
        );
    }

    #[test]
    fn default_points_at_local_backend() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url(), DEFAULT_API_URL);
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
    }
}

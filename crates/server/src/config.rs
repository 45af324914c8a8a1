//! Server settings from the environment.

use std::net::SocketAddr;

use thiserror::Error;

pub const BIND_ADDR_ENV: &str = "FINCATALOG_BIND_ADDR";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3002";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("FINCATALOG_BIND_ADDR must be host:port, got {0:?}: {1}")]
    InvalidBindAddr(String, std::net::AddrParseError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    pub fn parse(bind_addr: &str) -> Result<Self, ConfigError> {
        let bind_addr = bind_addr
            .trim()
            .parse()
            .map_err(|e| ConfigError::InvalidBindAddr(bind_addr.to_string(), e))?;
        Ok(Self { bind_addr })
    }

    /// Read `FINCATALOG_BIND_ADDR`, defaulting to `0.0.0.0:3002`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var(BIND_ADDR_ENV).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        Self::parse(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_default_address() {
        let config = ServerConfig::parse(DEFAULT_BIND_ADDR).unwrap();
        assert_eq!(config.bind_addr.port(), 3002);
    }

    #[test]
    fn rejects_missing_port() {
        assert!(ServerConfig::parse("localhost").is_err());
    }
}

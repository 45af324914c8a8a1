//! `fincatalog-client`
//!
//! **Responsibility:** typed access to the `/bp/products` REST backend.
//!
//! This crate provides:
//! - [`ProductApi`], the service seam the workflows are written against
//! - [`HttpProductClient`], its `reqwest` implementation
//! - [`ClientConfig`], the injected backend location
//!
//! Every call is a single request/response round trip: no retries, no caching.

pub mod config;
pub mod error;
pub mod http;
pub mod service;

pub use config::{ClientConfig, ConfigError};
pub use error::ClientError;
pub use http::HttpProductClient;
pub use service::ProductApi;

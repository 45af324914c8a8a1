//! `fincatalog-server`
//!
//! **Responsibility:** development backend for the `/bp/products` REST contract.
//!
//! Products live in memory and are lost on restart. The same field rules the
//! client form enforces are re-checked here, plus identifier uniqueness.

pub mod app;
pub mod config;
pub mod store;

pub use app::{build_app, serve, ServerState};
pub use config::ServerConfig;
pub use store::{InMemoryProductStore, ProductStore};

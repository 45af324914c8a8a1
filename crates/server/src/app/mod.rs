//! HTTP wiring (Axum router + shared state).
//!
//! - `routes.rs`: the `/bp/products` handlers
//! - `errors.rs`: backend error bodies

use std::future::Future;
use std::sync::Arc;

use axum::{Extension, Router};
use tokio::net::TcpListener;

use fincatalog_core::{Clock, SystemClock};

use crate::store::{InMemoryProductStore, ProductStore};

pub mod errors;
pub mod routes;

/// State shared by every handler.
#[derive(Clone)]
pub struct ServerState {
    pub store: Arc<dyn ProductStore>,
    pub clock: Arc<dyn Clock>,
}

impl ServerState {
    pub fn new(store: Arc<dyn ProductStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Empty in-memory catalog on the system clock.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryProductStore::new()), Arc::new(SystemClock))
    }
}

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(state: ServerState) -> Router {
    Router::new()
        .nest("/bp/products", routes::router())
        .layer(Extension(state))
}

/// Serve `state` on an already-bound listener until `shutdown` resolves.
pub async fn serve<F>(
    listener: TcpListener,
    state: ServerState,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, build_app(state))
        .with_graceful_shutdown(shutdown)
        .await
}

use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fincatalog_observability::init();

    let config = fincatalog_server::ServerConfig::from_env().context("invalid server config")?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(addr = %listener.local_addr()?, "listening");

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for shutdown signal: {e}");
        }
    };

    fincatalog_server::serve(listener, fincatalog_server::ServerState::in_memory(), shutdown)
        .await
        .context("server error")?;

    tracing::info!("shut down");
    Ok(())
}

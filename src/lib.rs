pub mod analysis;
pub mod api;
pub mod config;
pub mod core_state;
pub mod models;
pub mod pipeline;
pub mod store;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

/// Run the service until interrupted.
pub async fn run() -> Result<(), String> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("Concorda starting v{}", config::APP_VERSION);

    let core = Arc::new(core_state::CoreState::new());

    let mut server = api::start_api_server(core, config::default_bind_addr()).await?;
    tracing::info!(addr = %server.session.server_addr, "Accepting requests");

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| format!("Shutdown signal listener failed: {e}"))?;

    server.shutdown();
    Ok(())
}

// Cars Catalog - Web Server
// REST API with Axum over the in-memory registries

use anyhow::{Context, Result};
use cars_catalog::{build_router, AppState, ServerConfig, VERSION};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cars_catalog=debug,cars_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!(version = VERSION, ?config, "starting cars catalog server");

    // Registries live as long as the server does
    let state = AppState::new(config.car_writes);
    if config.seed_on_start {
        state.seed.populate_db();
    }

    let app = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;

    tracing::info!("server running on http://{}", addr);
    tracing::info!("   API: http://{}/cars", addr);
    tracing::info!("   Seed: http://{}/seed", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
}

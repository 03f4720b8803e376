use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use service_pricing::{app, config::ServerConfig, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "service_pricing=info,tower_http=info".into()),
        )
        .init();

    let config = ServerConfig::load()?;
    info!("Loaded configuration: {:?}", config);

    let addr = config.bind_addr();
    let router = app(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Pricing service listening on http://{}", addr);
    info!("  GET  /               - landing page");
    info!("  POST /api            - total price");
    info!("  POST /api/breakdown  - per-service breakdown");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install CTRL+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal");
}

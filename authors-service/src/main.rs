//! Authors HTTP Service
//!
//! A small REST service managing author records held in memory.
//!
//! ## Endpoints
//!
//! - `GET /authors` and `GET /authors/{id}`
//! - `POST /authors`
//! - `PUT /authors/{id}`
//! - `DELETE /authors/{id}`

use tokio::{net::TcpListener, signal};
use tracing::info;

use authors_service::{
    config::AppConfig, create_author_service, error::AppResult, tracing::tracer::Tracer,
};

#[tokio::main]
async fn main() -> AppResult<()> {
    let config = AppConfig::load()?;

    Tracer::install(&config)?;

    info!(
        "Starting {} v{}",
        config.distribution.name,
        config.distribution.version.as_deref().unwrap_or("unknown"),
    );

    start(&config).await?;

    Ok(())
}

async fn start(config: &AppConfig) -> AppResult<()> {
    let router = create_author_service().router();

    let listener = TcpListener::bind(config.server.http_address).await?;
    info!("HTTP server started at {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", err);
    }
}

//! HTTP API over the Game Data client and the enrichment pipeline.

mod error;
mod routes;

use anyhow::{Context, Result};
use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use wowah_blizzard::{GameDataClient, ItemEnrichmentPipeline};
use wowah_store::Config;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    /// Game Data API client.
    pub client: Arc<GameDataClient>,
    /// Item enrichment over the same client.
    pub pipeline: Arc<ItemEnrichmentPipeline>,
}

impl AppState {
    /// Builds the client and pipeline once for the server's lifetime.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Arc::new(GameDataClient::from_config(config)?);
        let pipeline = Arc::new(ItemEnrichmentPipeline::from_config(client.clone(), config));
        Ok(Self { client, pipeline })
    }
}

/// Builds the API router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/health", get(routes::health))
        .route("/api/connected-realms", get(routes::connected_realms))
        .route("/api/connected-realm", get(routes::connected_realm))
        .route("/api/auctions", get(routes::auctions))
        .route("/api/auctions-by-item", get(routes::auctions_by_item))
        .route("/api/item", get(routes::item))
        .route("/api/items", post(routes::items))
        .route("/api/item-search", get(routes::item_search))
        .route("/api/item-classes", get(routes::item_classes))
        .route("/api/item-subclasses", get(routes::item_subclasses))
        .layer(cors)
        .with_state(state)
}

/// Serves the API on `bind` until Ctrl+C or SIGTERM.
pub async fn run(config: &Config, bind: &str) -> Result<()> {
    let state = AppState::from_config(config)?;
    info!(
        region = %config.region,
        locale = %config.locale,
        cache = %config.cache_dir().display(),
        "Initialized state"
    );

    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind {bind}"))?;
    info!(address = %listener.local_addr()?, "Server running");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}

#[cfg(test)]
mod tests;

//! HTTP surface: landing page, generation, download and the demo name helper.

pub mod assets;
pub mod error;
pub mod handlers;
pub mod names;
pub mod templates;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::Settings;
use crate::pipeline::VisualHasher;

pub use error::WebError;

/// Shared, immutable state of the web server.
pub struct AppState {
    pub hasher: VisualHasher,
    pub download_chunk_size: usize,
}

impl AppState {
    pub fn new(hasher: VisualHasher, download_chunk_size: usize) -> Self {
        Self {
            hasher,
            download_chunk_size,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            VisualHasher::new(settings.hash_config()),
            settings.download_chunk_size,
        )
    }
}

/// Create the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/random-name", get(handlers::random_name))
        .route("/generate-plot", post(handlers::generate_plot))
        .route("/download-plot", post(handlers::download_plot))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind to the configured address and serve until Ctrl-C.
pub async fn serve(settings: Settings) -> crate::Result<()> {
    let addr = settings.socket_addr()?;
    let state = Arc::new(AppState::from_settings(&settings));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, variant = %settings.variant, "visual-hash listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "could not listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

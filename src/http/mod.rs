//! HTTP surface of the retrieval service.

pub mod error;
pub mod handlers;

use crate::FinBrief;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn router(app: Arc<FinBrief>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/index_articles", get(handlers::index_articles))
        .route("/query", get(handlers::query_articles))
        .route("/scrape_market_news", get(handlers::scrape_market_news))
        .layer(TraceLayer::new_for_http())
        .with_state(app)
}

/// Bind `addr` and serve until ctrl-c.
pub async fn serve(app: Arc<FinBrief>, addr: &str) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server starting on {}", listener.local_addr()?);

    axum::serve(listener, router(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| tracing::error!("Server encountered an error: {e:?}"))
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received");
    }
}

//! HTTP API for reading and administering FAQs.

pub mod handlers;

use crate::domain::error::FaqError;
use crate::infrastructure::storage::cache::spawn_cache_sweeper;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use handlers::*;
use tracing::info;

/// Build the axum router with shared state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/faqs", get(list_faqs).post(create_faq))
        .route("/api/faqs/", get(list_faqs))
        .route("/api/faqs/{id}", get(get_faq).put(update_faq))
        .route("/api/cache/clear", post(clear_cache))
        .layer(axum::extract::DefaultBodyLimit::max(1024 * 1024)) // 1 MB max request body
        .with_state(state)
}

/// Serve until Ctrl-C.
pub async fn serve(state: AppState, bind_addr: &str, port: u16) -> Result<(), FaqError> {
    let addr = format!("{}:{}", bind_addr, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("FAQ API listening on http://{addr}");

    let sweeper = spawn_cache_sweeper(state.cache.clone(), state.config.cache.sweep_interval());
    let served = axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await;
    sweeper.abort();
    served?;

    info!("FAQ API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

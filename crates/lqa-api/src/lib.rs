//! LQA API /v1: REST endpoints for evaluation and diagnostics
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use state::AppState;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/v1/evaluate", post(handlers::evaluate))
        .route("/v1/inspect", post(handlers::inspect))
        .route("/v1/duplicates/{key}", get(handlers::duplicates))
        .route("/v1/health", get(handlers::health))
        .route("/v1/metrics", get(handlers::metrics_text))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors())
        .with_state(state)
}

pub async fn run(addr: &str, state: Arc<AppState>) {
    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");

    tracing::info!("LQA API listening on {}", addr);
    axum::serve(listener, app)
        .await
        .expect("Server error");
}

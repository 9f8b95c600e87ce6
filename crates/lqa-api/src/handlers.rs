//! API Handlers
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use lqa_artifact::ArtifactInspector;
use lqa_core::{ProductRecord, LQA_VERSION};
use lqa_dedup::{DuplicateStore, DEFAULT_LOOKUP_LIMIT};
use lqa_gate::QaStatus;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

/// Evaluate a listing and index it for duplicate lookups.
pub async fn evaluate(
    State(state): State<Arc<AppState>>,
    Json(record): Json<ProductRecord>,
) -> (StatusCode, Json<Value>) {
    let trace_id = Uuid::new_v4();
    state.metrics.evaluations.inc();

    match state.gate.evaluate(&record, &state.inspector).await {
        Ok(result) => {
            if result.status == QaStatus::Failed {
                state.metrics.failures.inc();
            }
            state.index.insert(&record).await;
            tracing::info!(
                %trace_id,
                id = %record.id,
                score = result.score,
                status = ?result.status,
                "listing evaluated"
            );
            (StatusCode::OK, Json(json!(result)))
        }
        Err(e) => {
            tracing::warn!(%trace_id, id = %record.id, error = %e, "evaluation rejected");
            (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() })))
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct InspectRequest {
    pub path: Option<String>,
    pub url: Option<String>,
}

/// Diagnostics access to the artifact inspector.
pub async fn inspect(
    State(state): State<Arc<AppState>>,
    Json(request): Json<InspectRequest>,
) -> (StatusCode, Json<Value>) {
    let inspection = state
        .inspector
        .inspect(request.path.as_deref(), request.url.as_deref())
        .await;
    (StatusCode::OK, Json(json!(inspection)))
}

#[derive(Debug, Deserialize)]
pub struct DuplicatesQuery {
    pub exclude: Option<String>,
    pub limit: Option<usize>,
}

/// Bounded duplicate lookup by concept key.
pub async fn duplicates(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
    Query(query): Query<DuplicatesQuery>,
) -> (StatusCode, Json<Value>) {
    let limit = query.limit.unwrap_or(DEFAULT_LOOKUP_LIMIT).min(DEFAULT_LOOKUP_LIMIT);
    let exclude = query.exclude.unwrap_or_default();

    match state.index.find_by_concept_key(&key, &exclude, limit).await {
        Ok(matches) => (StatusCode::OK, Json(json!({ "concept_key": key, "matches": matches }))),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": e.to_string() })),
        ),
    }
}

pub async fn health() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok", "version": LQA_VERSION })))
}

pub async fn metrics_text(State(state): State<Arc<AppState>>) -> (StatusCode, String) {
    match state.metrics.encode() {
        Ok(text) => (StatusCode::OK, text),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

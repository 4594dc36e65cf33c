//! HTTP route handlers for the risk scoring server.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::debug;

use medrisk_core::{RiskResult, SymptomReport};

use crate::ServerState;

#[derive(Debug, Serialize)]
pub struct LivenessResponse {
    pub message: &'static str,
}

/// Liveness endpoint; fixed payload regardless of request history.
pub async fn root() -> Json<LivenessResponse> {
    Json(LivenessResponse { message: "ML service is running" })
}

/// Scores a symptom report against the configured risk model.
///
/// Malformed or missing fields never reach this function; the `Json`
/// extractor rejects them with a 4xx before deserialization completes.
pub async fn predict(
    State(state): State<Arc<ServerState>>,
    Json(report): Json<SymptomReport>,
) -> Json<RiskResult> {
    let result = state.model.compute(&report);
    debug!(
        fever = report.fever,
        cough = report.cough,
        headache = report.headache,
        confidence = result.confidence,
        "scored symptom report"
    );
    Json(result)
}

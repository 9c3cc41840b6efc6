use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use quill_core::entities::{AnalysisResult, DraftResult, RewriteResult};
use quill_core::requests::{AnalyzeRequest, DraftRequest, RewriteRequest};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::AppState;
use super::error::ApiError;

pub async fn health() -> Json<Value> {
    Json(serde_json::json!({"status": "ok"}))
}

pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let request: AnalyzeRequest = decode(&state, "analyze_request", payload)?;
    state
        .editor
        .analyze(&request)
        .await
        .map(Json)
        .map_err(|error| ApiError::from_editor(&error, "Failed to analyze chain"))
}

pub async fn draft(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<DraftResult>, ApiError> {
    let request: DraftRequest = decode(&state, "draft_request", payload)?;
    state
        .editor
        .draft(&request)
        .await
        .map(Json)
        .map_err(|error| ApiError::from_editor(&error, "Failed to draft article"))
}

pub async fn rewrite(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<RewriteResult>, ApiError> {
    let request: RewriteRequest = decode(&state, "rewrite_request", payload)?;
    state
        .editor
        .rewrite(&request)
        .await
        .map(Json)
        .map_err(|error| ApiError::from_editor(&error, "Failed to rewrite article"))
}

pub async fn schema(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.registry.get(&name).cloned().map(Json).ok_or_else(|| {
        ApiError::new(
            StatusCode::NOT_FOUND,
            "Schema not found",
            format!("no schema named '{name}'"),
        )
    })
}

/// Parse the body, check it against the named request schema, then deserialize.
fn decode<T: DeserializeOwned>(
    state: &AppState,
    schema: &str,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<T, ApiError> {
    let Json(value) = payload?;
    state
        .registry
        .validate(schema, &value)
        .map_err(|error| ApiError::invalid_request(error.to_string()))?;
    serde_json::from_value(value).map_err(|error| ApiError::invalid_request(error.to_string()))
}

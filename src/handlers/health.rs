// src/handlers/health.rs
use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::error::{AppError, Context};
use crate::state::AppState;

// GET /v1/health - Store reachability
pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    state.store.status_check().await.context("checking store status")?;
    Ok(Json(json!({ "status": "ok" })))
}

use axum::{routing::get, Router};

use crate::handlers::health::health_check;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/health", get(health_check))
}

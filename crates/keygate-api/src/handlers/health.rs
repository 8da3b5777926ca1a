//! Health check handler.

use axum::Json;
use axum::extract::State;

use keygate_core::traits::record_store::RecordStore;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store_ok = state.store.health_check().await.unwrap_or(false);

    Json(HealthResponse {
        status: if store_ok { "ok" } else { "degraded" }.to_string(),
    })
}

//! Handler for the `/health` endpoint.

use axum::extract::State;
use axum::Json;
use serde_json::json;

use crate::state::AppState;

/// GET /health
///
/// Liveness probe. Reports the crate version and whether the database
/// answered a trivial query; a database outage still returns 200 so the
/// process itself reads as alive.
pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    let db_healthy = tripline_db::health_check(&state.pool).await.is_ok();

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "db_healthy": db_healthy,
    }))
}

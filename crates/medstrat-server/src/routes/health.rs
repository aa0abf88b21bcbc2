use axum::extract::State;
use axum::Json;

use crate::state::AppState;

/// GET /api/health: liveness plus a live-session count.
pub async fn health(State(app): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "sessions": app.sessions.len().await,
        "capacity": app.sessions.capacity(),
    }))
}

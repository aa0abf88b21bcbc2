use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use medstrat_core::ranking::rank_brand_strategies;
use medstrat_core::recommend;
use medstrat_core::view;
use medstrat_core::wizard::Action;

use crate::error::AppError;
use crate::state::{parse_session_id, AppState, SessionEntry};

fn session_body(id: &str, entry: &SessionEntry) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "created_at": entry.created_at,
        "updated_at": entry.touched_at,
        "session": entry.session,
        "view": view::render(&entry.session),
    })
}

/// POST /api/sessions: start a new wizard session.
pub async fn create_session(
    State(app): State<AppState>,
) -> (StatusCode, Json<serde_json::Value>) {
    let (id, entry) = app.sessions.create().await;
    tracing::debug!(session = %id, "session created");
    (
        StatusCode::CREATED,
        Json(session_body(&id.to_string(), &entry)),
    )
}

/// GET /api/sessions/{id}: current session and its rendered view.
pub async fn get_session(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let uuid = parse_session_id(&id)?;
    let entry = app.sessions.get(&uuid).await?;
    Ok(Json(session_body(&id, &entry)))
}

/// DELETE /api/sessions/{id}
pub async fn delete_session(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let uuid = parse_session_id(&id)?;
    app.sessions.remove(&uuid).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/sessions/{id}/actions: dispatch one wizard action.
///
/// A rejected action leaves the stored session untouched. Bodies that do not
/// decode to an `Action` are reported as 400 with the decode error.
pub async fn apply_action(
    State(app): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Action>, JsonRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let uuid = parse_session_id(&id)?;
    let Json(action) = payload?;
    let name = action.name();
    let (outcome, entry) = app.sessions.apply(&uuid, action).await.inspect_err(|e| {
        tracing::debug!(session = %uuid, action = name, error = %e, "action rejected");
    })?;

    let mut body = session_body(&id, &entry);
    body["action"] = serde_json::json!(name);
    body["outcome"] = serde_json::json!(outcome);
    Ok(Json(body))
}

/// GET /api/sessions/{id}/strategy: the full recommendation bundle.
pub async fn get_strategy(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let uuid = parse_session_id(&id)?;
    let entry = app.sessions.get(&uuid).await?;
    let s = &entry.session;
    Ok(Json(serde_json::json!({
        "id": id,
        "report": view::strategy_report(s),
        "specialty": recommend::specialty_recommendations(s),
        "practice": recommend::practice_recommendations(s),
        "competitive": recommend::competitive_summary(s),
        "brand_strategies": rank_brand_strategies(s),
    })))
}

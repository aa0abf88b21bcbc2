use axum::extract::Query;
use axum::Json;
use medstrat_core::error::MedstratError;
use medstrat_core::knowledge;
use medstrat_core::ranking::Ranker;
use serde::Deserialize;

use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct RankQuery {
    pub focus: Option<String>,
}

/// GET /api/brand-strategies?focus=<key>: strategies ranked for a marketing
/// focus. Without a focus nothing is ranked.
pub async fn rank_strategies(
    Query(q): Query<RankQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let focus = q.focus.filter(|f| !f.trim().is_empty());
    if let Some(f) = focus.as_deref() {
        if knowledge::focus_area(f).is_none() {
            return Err(MedstratError::UnknownFocus(f.to_string()).into());
        }
    }
    let ranked = Ranker::default().rank(focus.as_deref());
    Ok(Json(serde_json::json!({
        "focus": focus,
        "strategies": ranked,
    })))
}

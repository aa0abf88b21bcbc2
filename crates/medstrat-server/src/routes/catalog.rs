use axum::Json;

use crate::error::AppError;

/// GET /api/catalog: every reference table, in display order.
pub async fn get_catalog() -> Result<Json<serde_json::Value>, AppError> {
    let catalog = serde_json::to_value(medstrat_core::knowledge::catalog())?;
    Ok(Json(catalog))
}

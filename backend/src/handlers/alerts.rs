//! HTTP handlers for low-stock alerts

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::AppResult;
use crate::models::LowStockAlertResponse;
use crate::services::AlertService;
use crate::AppState;

/// Low-stock alerts for a company
pub async fn get_low_stock_alerts(
    State(state): State<AppState>,
    Path(company_id): Path<i32>,
) -> AppResult<Json<LowStockAlertResponse>> {
    let service = AlertService::new(state.db);
    let alerts = service.low_stock_alerts(company_id).await?;
    Ok(Json(alerts))
}

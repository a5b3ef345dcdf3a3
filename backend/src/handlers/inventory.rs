//! HTTP handlers for inventory management endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::AppResult;
use crate::models::{InventoryChange, InventoryLevel};
use crate::services::inventory::{AdjustInventoryInput, InventoryService};
use crate::AppState;

/// Adjust stock for a product in a warehouse
pub async fn adjust_inventory(
    State(state): State<AppState>,
    Json(input): Json<AdjustInventoryInput>,
) -> AppResult<Json<InventoryLevel>> {
    let service = InventoryService::new(state.db);
    let level = service.adjust(input).await?;
    Ok(Json(level))
}

/// Change history for a product in a warehouse
pub async fn list_inventory_changes(
    State(state): State<AppState>,
    Path((product_id, warehouse_id)): Path<(i32, i32)>,
) -> AppResult<Json<Vec<InventoryChange>>> {
    let service = InventoryService::new(state.db);
    let changes = service.list_changes(product_id, warehouse_id).await?;
    Ok(Json(changes))
}

//! HTTP handlers for suppliers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::AppResult;
use crate::models::Supplier;
use crate::services::supplier::{CreateSupplierInput, SupplierService};
use crate::AppState;

/// Create a supplier
pub async fn create_supplier(
    State(state): State<AppState>,
    Json(input): Json<CreateSupplierInput>,
) -> AppResult<(StatusCode, Json<Supplier>)> {
    let service = SupplierService::new(state.db);
    let supplier = service.create_supplier(input).await?;
    Ok((StatusCode::CREATED, Json(supplier)))
}

/// Associate a supplier with a product
pub async fn link_product_supplier(
    State(state): State<AppState>,
    Path((product_id, supplier_id)): Path<(i32, i32)>,
) -> AppResult<StatusCode> {
    let service = SupplierService::new(state.db);
    service.link_product(product_id, supplier_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

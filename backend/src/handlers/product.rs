//! HTTP handlers for the product catalog

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::AppResult;
use crate::services::product::{CreateProductInput, CreatedProduct, ProductDetail, ProductService};
use crate::AppState;

/// Create a product together with its initial stock
pub async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<CreateProductInput>,
) -> AppResult<(StatusCode, Json<CreatedProduct>)> {
    let service = ProductService::new(state.db);
    let created = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Get a product with its suppliers
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
) -> AppResult<Json<ProductDetail>> {
    let service = ProductService::new(state.db);
    let product = service.get_product(product_id).await?;
    Ok(Json(product))
}

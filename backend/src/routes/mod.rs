//! Route definitions for the Stockwatch API

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/products", product_routes())
        .nest("/suppliers", supplier_routes())
        .nest("/inventory", inventory_routes())
        .nest("/companies", company_routes())
}

/// Product catalog routes
fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::create_product))
        .route("/:product_id", get(handlers::get_product))
        .route(
            "/:product_id/suppliers/:supplier_id",
            post(handlers::link_product_supplier),
        )
}

/// Supplier routes
fn supplier_routes() -> Router<AppState> {
    Router::new().route("/", post(handlers::create_supplier))
}

/// Inventory routes
fn inventory_routes() -> Router<AppState> {
    Router::new()
        .route("/adjust", post(handlers::adjust_inventory))
        .route(
            "/:product_id/:warehouse_id/changes",
            get(handlers::list_inventory_changes),
        )
}

/// Company-scoped routes
fn company_routes() -> Router<AppState> {
    Router::new().route(
        "/:company_id/alerts/low-stock",
        get(handlers::get_low_stock_alerts),
    )
}

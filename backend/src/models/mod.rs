//! Database models for the Stockwatch server
//!
//! Re-exports models from the shared crate and adds backend-specific row types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

pub use shared::models::*;

/// Product row as stored
#[derive(Debug, FromRow)]
pub struct ProductRow {
    pub id: i32,
    pub name: String,
    pub sku: String,
    pub price: Decimal,
    pub low_stock_threshold: Option<i32>,
    pub is_bundle: bool,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            sku: row.sku,
            price: row.price,
            low_stock_threshold: row.low_stock_threshold,
            is_bundle: row.is_bundle,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct WarehouseRow {
    pub id: i32,
    pub company_id: i32,
    pub name: String,
}

impl From<WarehouseRow> for Warehouse {
    fn from(row: WarehouseRow) -> Self {
        Self {
            id: row.id,
            company_id: row.company_id,
            name: row.name,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct InventoryRow {
    pub product_id: i32,
    pub warehouse_id: i32,
    pub quantity: i32,
}

impl From<InventoryRow> for InventoryLevel {
    fn from(row: InventoryRow) -> Self {
        Self {
            product_id: row.product_id,
            warehouse_id: row.warehouse_id,
            quantity: row.quantity,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct SaleRow {
    pub id: i32,
    pub product_id: i32,
    pub warehouse_id: i32,
    pub quantity: i32,
    pub timestamp: DateTime<Utc>,
}

impl From<SaleRow> for Sale {
    fn from(row: SaleRow) -> Self {
        Self {
            id: row.id,
            product_id: row.product_id,
            warehouse_id: row.warehouse_id,
            quantity: row.quantity,
            timestamp: row.timestamp,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct SupplierRow {
    pub id: i32,
    pub name: String,
    pub contact_email: Option<String>,
}

impl From<SupplierRow> for Supplier {
    fn from(row: SupplierRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            contact_email: row.contact_email,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct ProductSupplierRow {
    pub product_id: i32,
    pub supplier_id: i32,
}

impl From<ProductSupplierRow> for ProductSupplier {
    fn from(row: ProductSupplierRow) -> Self {
        Self {
            product_id: row.product_id,
            supplier_id: row.supplier_id,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct InventoryChangeRow {
    pub id: i32,
    pub product_id: i32,
    pub warehouse_id: i32,
    pub quantity_change: i32,
    pub change_type: String,
    pub change_time: DateTime<Utc>,
}

impl TryFrom<InventoryChangeRow> for InventoryChange {
    type Error = String;

    fn try_from(row: InventoryChangeRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            product_id: row.product_id,
            warehouse_id: row.warehouse_id,
            quantity_change: row.quantity_change,
            change_type: row.change_type.parse()?,
            change_time: row.change_time,
        })
    }
}

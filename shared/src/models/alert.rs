//! Low-stock alert records returned to callers

use serde::{Deserialize, Serialize};

use crate::types::{ProductId, SupplierId, WarehouseId};

/// Supplier descriptor nested in every alert
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SupplierContact {
    pub id: SupplierId,
    pub name: String,
    pub contact_email: Option<String>,
}

/// One alert per (product, warehouse, supplier)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LowStockAlert {
    pub product_id: ProductId,
    pub product_name: String,
    pub sku: String,
    pub warehouse_id: WarehouseId,
    pub warehouse_name: String,
    pub current_stock: i32,
    pub threshold: i32,
    pub days_until_stockout: u64,
    pub supplier: SupplierContact,
}

/// Response body for the low-stock alert query
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LowStockAlertResponse {
    pub alerts: Vec<LowStockAlert>,
    pub total_alerts: usize,
}

//! Faults raised by the alert computation

use thiserror::Error;

use crate::types::{ProductId, WarehouseId};

/// A fault aborts the whole computation; no partial alert list is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlertError {
    #[error("Duplicate inventory rows for product {product_id} in warehouse {warehouse_id}")]
    DuplicateInventory {
        product_id: ProductId,
        warehouse_id: WarehouseId,
    },

    #[error("Stockout projection overflowed for product {product_id} in warehouse {warehouse_id}")]
    ArithmeticOverflow {
        product_id: ProductId,
        warehouse_id: WarehouseId,
    },
}

//! Supplier models

use serde::{Deserialize, Serialize};

use crate::types::{ProductId, SupplierId};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    pub contact_email: Option<String>,
}

/// Row of the many-to-many product/supplier association
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct ProductSupplier {
    pub product_id: ProductId,
    pub supplier_id: SupplierId,
}

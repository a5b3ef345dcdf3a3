//! Read-only input to the alert computation

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::{InventoryLevel, Product, ProductSupplier, Sale, Supplier, Warehouse};
use crate::types::{CompanyId, WarehouseId};

/// Consistent view of the relations the alert computation reads.
///
/// Rows belonging to other companies may be present; they are ignored
/// by scoping everything through warehouse ownership.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanySnapshot {
    pub company_id: CompanyId,
    #[serde(default)]
    pub warehouses: Vec<Warehouse>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub inventory: Vec<InventoryLevel>,
    #[serde(default)]
    pub sales: Vec<Sale>,
    #[serde(default)]
    pub suppliers: Vec<Supplier>,
    #[serde(default)]
    pub product_suppliers: Vec<ProductSupplier>,
}

impl CompanySnapshot {
    pub fn new(company_id: CompanyId) -> Self {
        Self {
            company_id,
            ..Default::default()
        }
    }

    /// Warehouses owned by the snapshot's company
    pub fn company_warehouses(&self) -> impl Iterator<Item = &Warehouse> + '_ {
        self.warehouses
            .iter()
            .filter(move |w| w.company_id == self.company_id)
    }

    pub fn company_warehouse_ids(&self) -> BTreeSet<WarehouseId> {
        self.company_warehouses().map(|w| w.id).collect()
    }
}

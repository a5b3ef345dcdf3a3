//! Per-product sales velocity over a trailing window

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::snapshot::CompanySnapshot;
use crate::types::{ProductId, TimeRange};

/// Mean units per sale, held as an exact ratio.
///
/// Only built from at least one sale, so `sale_count` is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesVelocity {
    pub units_sold: i64,
    pub sale_count: i64,
}

impl SalesVelocity {
    fn first(quantity: i32) -> Self {
        Self {
            units_sold: i64::from(quantity),
            sale_count: 1,
        }
    }

    fn record(&mut self, quantity: i32) {
        self.units_sold += i64::from(quantity);
        self.sale_count += 1;
    }

    pub fn is_positive(&self) -> bool {
        self.units_sold > 0 && self.sale_count > 0
    }
}

/// Velocity per product from company sales inside `window`.
///
/// Velocity is company-wide: sales from every warehouse of the company
/// count toward the same product. Products without a sale in the window
/// have no entry.
pub fn estimate_velocities(
    snapshot: &CompanySnapshot,
    window: &TimeRange,
) -> BTreeMap<ProductId, SalesVelocity> {
    let warehouses = snapshot.company_warehouse_ids();
    let mut velocities: BTreeMap<ProductId, SalesVelocity> = BTreeMap::new();

    for sale in snapshot
        .sales
        .iter()
        .filter(|s| window.contains(s.timestamp) && warehouses.contains(&s.warehouse_id))
    {
        velocities
            .entry(sale.product_id)
            .and_modify(|v| v.record(sale.quantity))
            .or_insert_with(|| SalesVelocity::first(sale.quantity));
    }

    velocities
}

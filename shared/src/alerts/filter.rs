//! Selection of low-stock (product, warehouse) pairs

use std::collections::{BTreeMap, BTreeSet};

use super::error::AlertError;
use super::projection::days_until_stockout;
use super::snapshot::CompanySnapshot;
use super::velocity::SalesVelocity;
use crate::models::{Product, Warehouse};
use crate::types::{ProductId, WarehouseId};

/// A (product, warehouse) pair below threshold with an established velocity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LowStockCandidate<'a> {
    pub product: &'a Product,
    pub warehouse: &'a Warehouse,
    pub quantity: i32,
    pub threshold: i32,
    pub velocity: SalesVelocity,
    pub days_until_stockout: u64,
}

/// Inventory rows of the company's warehouses that are strictly below the
/// product threshold, restricted to products with a velocity estimate.
///
/// Output is ordered by product id, then warehouse id. Inventory rows whose
/// product is missing from the snapshot are skipped.
pub fn low_stock_candidates<'a>(
    snapshot: &'a CompanySnapshot,
    velocities: &BTreeMap<ProductId, SalesVelocity>,
) -> Result<Vec<LowStockCandidate<'a>>, AlertError> {
    let warehouses: BTreeMap<WarehouseId, &Warehouse> =
        snapshot.company_warehouses().map(|w| (w.id, w)).collect();
    let products: BTreeMap<ProductId, &Product> =
        snapshot.products.iter().map(|p| (p.id, p)).collect();

    let mut seen = BTreeSet::new();
    let mut candidates = BTreeMap::new();

    for level in &snapshot.inventory {
        let Some(&warehouse) = warehouses.get(&level.warehouse_id) else {
            continue;
        };
        let key = (level.product_id, level.warehouse_id);
        if !seen.insert(key) {
            return Err(AlertError::DuplicateInventory {
                product_id: level.product_id,
                warehouse_id: level.warehouse_id,
            });
        }

        let Some(&product) = products.get(&level.product_id) else {
            continue;
        };
        let Some(&velocity) = velocities.get(&product.id) else {
            continue;
        };
        if !product.is_low_stock(level.quantity) {
            continue;
        }

        let days = days_until_stockout(level.quantity, &velocity).ok_or(
            AlertError::ArithmeticOverflow {
                product_id: level.product_id,
                warehouse_id: level.warehouse_id,
            },
        )?;

        candidates.insert(
            key,
            LowStockCandidate {
                product,
                warehouse,
                quantity: level.quantity,
                threshold: product.effective_threshold(),
                velocity,
                days_until_stockout: days,
            },
        );
    }

    Ok(candidates.into_values().collect())
}

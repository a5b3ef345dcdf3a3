//! Expansion of candidates into one row per supplier

use std::collections::{BTreeMap, BTreeSet};

use super::filter::LowStockCandidate;
use super::snapshot::CompanySnapshot;
use crate::models::Supplier;
use crate::types::{ProductId, SupplierId};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupplierAlertRow<'a> {
    pub candidate: LowStockCandidate<'a>,
    pub supplier: &'a Supplier,
}

/// Join candidates with the product/supplier association.
///
/// A product with N linked suppliers yields N rows per candidate, ordered by
/// supplier id; a product with none yields nothing. Links to suppliers
/// missing from the snapshot are dropped.
pub fn fan_out_suppliers<'a>(
    candidates: Vec<LowStockCandidate<'a>>,
    snapshot: &'a CompanySnapshot,
) -> Vec<SupplierAlertRow<'a>> {
    let suppliers: BTreeMap<SupplierId, &Supplier> =
        snapshot.suppliers.iter().map(|s| (s.id, s)).collect();

    let mut links: BTreeMap<ProductId, BTreeSet<SupplierId>> = BTreeMap::new();
    for link in &snapshot.product_suppliers {
        links
            .entry(link.product_id)
            .or_default()
            .insert(link.supplier_id);
    }

    let mut rows = Vec::new();
    for candidate in candidates {
        let Some(supplier_ids) = links.get(&candidate.product.id) else {
            continue;
        };
        rows.extend(
            supplier_ids
                .iter()
                .filter_map(|id| suppliers.get(id).copied())
                .map(|supplier| SupplierAlertRow { candidate, supplier }),
        );
    }

    rows
}

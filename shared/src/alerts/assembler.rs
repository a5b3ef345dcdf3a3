//! Final response shaping

use super::fanout::SupplierAlertRow;
use crate::models::{LowStockAlert, LowStockAlertResponse, SupplierContact};

impl From<SupplierAlertRow<'_>> for LowStockAlert {
    fn from(row: SupplierAlertRow<'_>) -> Self {
        let candidate = row.candidate;
        Self {
            product_id: candidate.product.id,
            product_name: candidate.product.name.clone(),
            sku: candidate.product.sku.clone(),
            warehouse_id: candidate.warehouse.id,
            warehouse_name: candidate.warehouse.name.clone(),
            current_stock: candidate.quantity,
            threshold: candidate.threshold,
            days_until_stockout: candidate.days_until_stockout,
            supplier: SupplierContact {
                id: row.supplier.id,
                name: row.supplier.name.clone(),
                contact_email: row.supplier.contact_email.clone(),
            },
        }
    }
}

/// Collect rows into the response, preserving their order
pub fn assemble_alerts(rows: Vec<SupplierAlertRow<'_>>) -> LowStockAlertResponse {
    let alerts: Vec<LowStockAlert> = rows.into_iter().map(LowStockAlert::from).collect();

    LowStockAlertResponse {
        total_alerts: alerts.len(),
        alerts,
    }
}

//! Low-stock alerting tests
//!
//! Tests for the stockout projection and alert pipeline including:
//! - Non-sale products never alert
//! - Strict threshold comparison
//! - One alert per supplier with identical projection
//! - Ceiling projection against hand-computed values
//! - `total_alerts` always equals the alert count

use chrono::{DateTime, Duration, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use shared::alerts::{
    compute_low_stock_alerts, days_until_stockout, AlertError, AlertPolicy, CompanySnapshot,
    SalesVelocity,
};
use shared::models::{
    InventoryLevel, LowStockAlertResponse, Product, ProductSupplier, Sale, Supplier, Warehouse,
};

const COMPANY: i32 = 1;
const PRODUCT: i32 = 100;

/// Snapshot builder for a single company with one product
struct SnapshotBuilder {
    now: DateTime<Utc>,
    snapshot: CompanySnapshot,
}

impl SnapshotBuilder {
    fn new(threshold: Option<i32>) -> Self {
        let mut snapshot = CompanySnapshot::new(COMPANY);
        snapshot.products.push(Product {
            id: PRODUCT,
            name: "Widget A".to_string(),
            sku: "WID-001".to_string(),
            price: Decimal::new(1999, 2),
            low_stock_threshold: threshold,
            is_bundle: false,
        });
        Self {
            now: Utc::now(),
            snapshot,
        }
    }

    fn warehouse(mut self, id: i32, company_id: i32) -> Self {
        self.snapshot.warehouses.push(Warehouse {
            id,
            company_id,
            name: format!("Warehouse {}", id),
        });
        self
    }

    fn stock(mut self, warehouse_id: i32, quantity: i32) -> Self {
        self.snapshot.inventory.push(InventoryLevel {
            product_id: PRODUCT,
            warehouse_id,
            quantity,
        });
        self
    }

    fn sale(mut self, warehouse_id: i32, quantity: i32, days_ago: i64) -> Self {
        let id = self.snapshot.sales.len() as i32 + 1;
        self.snapshot.sales.push(Sale {
            id,
            product_id: PRODUCT,
            warehouse_id,
            quantity,
            timestamp: self.now - Duration::days(days_ago),
        });
        self
    }

    fn suppliers(mut self, count: i32) -> Self {
        for id in 1..=count {
            self.snapshot.suppliers.push(Supplier {
                id,
                name: format!("Supplier {}", id),
                contact_email: (id % 2 == 1).then(|| format!("orders{}@supplier.test", id)),
            });
            self.snapshot.product_suppliers.push(ProductSupplier {
                product_id: PRODUCT,
                supplier_id: id,
            });
        }
        self
    }

    fn run(&self) -> Result<LowStockAlertResponse, AlertError> {
        compute_low_stock_alerts(&self.snapshot, self.now, &AlertPolicy::default())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Threshold 10, two suppliers, stock 4, sales [2, 3, 4] => 2 alerts at ceil(4/3) = 2 days
    #[test]
    fn test_scenario_two_suppliers() {
        let response = SnapshotBuilder::new(Some(10))
            .warehouse(1, COMPANY)
            .stock(1, 4)
            .sale(1, 2, 1)
            .sale(1, 3, 10)
            .sale(1, 4, 29)
            .suppliers(2)
            .run()
            .unwrap();

        assert_eq!(response.total_alerts, 2);
        for alert in &response.alerts {
            assert_eq!(alert.product_id, PRODUCT);
            assert_eq!(alert.current_stock, 4);
            assert_eq!(alert.threshold, 10);
            assert_eq!(alert.days_until_stockout, 2);
        }
        assert_eq!(response.alerts[0].supplier.id, 1);
        assert_eq!(
            response.alerts[0].supplier.contact_email.as_deref(),
            Some("orders1@supplier.test")
        );
        assert_eq!(response.alerts[1].supplier.id, 2);
        assert_eq!(response.alerts[1].supplier.contact_email, None);
    }

    /// Same product with no sales in the last 30 days => no alerts
    #[test]
    fn test_scenario_no_recent_sales() {
        let response = SnapshotBuilder::new(Some(10))
            .warehouse(1, COMPANY)
            .stock(1, 4)
            .sale(1, 5, 31)
            .suppliers(2)
            .run()
            .unwrap();

        assert!(response.alerts.is_empty());
        assert_eq!(response.total_alerts, 0);
    }

    /// Stock equal to threshold is not low
    #[test]
    fn test_scenario_stock_equals_threshold() {
        let response = SnapshotBuilder::new(Some(10))
            .warehouse(1, COMPANY)
            .stock(1, 10)
            .sale(1, 2, 1)
            .suppliers(2)
            .run()
            .unwrap();

        assert_eq!(response.total_alerts, 0);
    }

    /// Unset threshold falls back to 10
    #[test]
    fn test_default_threshold() {
        let builder = SnapshotBuilder::new(None)
            .warehouse(1, COMPANY)
            .sale(1, 1, 1)
            .suppliers(1);

        assert_eq!(builder.stock(1, 9).run().unwrap().total_alerts, 1);

        let builder = SnapshotBuilder::new(None)
            .warehouse(1, COMPANY)
            .sale(1, 1, 1)
            .suppliers(1);

        assert_eq!(builder.stock(1, 10).run().unwrap().total_alerts, 0);
    }

    #[test]
    fn test_no_suppliers_no_alerts() {
        let response = SnapshotBuilder::new(Some(10))
            .warehouse(1, COMPANY)
            .stock(1, 0)
            .sale(1, 3, 1)
            .run()
            .unwrap();

        assert_eq!(response.total_alerts, 0);
    }

    #[test]
    fn test_product_without_inventory_rows() {
        let response = SnapshotBuilder::new(Some(10))
            .warehouse(1, COMPANY)
            .sale(1, 3, 1)
            .suppliers(2)
            .run()
            .unwrap();

        assert_eq!(response.total_alerts, 0);
    }

    /// Velocity is company-wide; every low warehouse is projected at that rate
    #[test]
    fn test_velocity_shared_across_warehouses() {
        let response = SnapshotBuilder::new(Some(10))
            .warehouse(1, COMPANY)
            .warehouse(2, COMPANY)
            .stock(1, 6)
            .stock(2, 20)
            // all sales in warehouse 2, which is not low
            .sale(2, 2, 1)
            .sale(2, 4, 2)
            .suppliers(1)
            .run()
            .unwrap();

        assert_eq!(response.total_alerts, 1);
        assert_eq!(response.alerts[0].warehouse_id, 1);
        // 6 / 3 = 2
        assert_eq!(response.alerts[0].days_until_stockout, 2);
    }

    #[test]
    fn test_other_company_ignored() {
        let response = SnapshotBuilder::new(Some(10))
            .warehouse(1, COMPANY)
            .warehouse(2, COMPANY + 1)
            .stock(2, 1)
            .sale(2, 5, 1)
            .suppliers(1)
            .run()
            .unwrap();

        assert_eq!(response.total_alerts, 0);
    }

    #[test]
    fn test_sales_from_other_company_do_not_establish_velocity() {
        let response = SnapshotBuilder::new(Some(10))
            .warehouse(1, COMPANY)
            .warehouse(2, COMPANY + 1)
            .stock(1, 1)
            .sale(2, 5, 1)
            .suppliers(1)
            .run()
            .unwrap();

        assert_eq!(response.total_alerts, 0);
    }

    #[test]
    fn test_empty_stock_projects_zero_days() {
        let response = SnapshotBuilder::new(Some(10))
            .warehouse(1, COMPANY)
            .stock(1, 0)
            .sale(1, 3, 1)
            .suppliers(1)
            .run()
            .unwrap();

        assert_eq!(response.alerts[0].days_until_stockout, 0);
    }

    #[test]
    fn test_zero_quantity_sales_project_zero_days() {
        let response = SnapshotBuilder::new(Some(10))
            .warehouse(1, COMPANY)
            .stock(1, 5)
            .sale(1, 0, 1)
            .suppliers(1)
            .run()
            .unwrap();

        assert_eq!(response.total_alerts, 1);
        assert_eq!(response.alerts[0].days_until_stockout, 0);
    }

    #[test]
    fn test_duplicate_inventory_aborts_whole_computation() {
        let result = SnapshotBuilder::new(Some(10))
            .warehouse(1, COMPANY)
            .warehouse(2, COMPANY)
            .stock(2, 1)
            .stock(1, 1)
            .stock(1, 2)
            .sale(1, 3, 1)
            .suppliers(1)
            .run();

        assert_eq!(
            result,
            Err(AlertError::DuplicateInventory {
                product_id: PRODUCT,
                warehouse_id: 1
            })
        );
    }

    #[test]
    fn test_hand_computed_projections() {
        // 7 / 2.5 = 2.8
        assert_eq!(
            days_until_stockout(7, &SalesVelocity { units_sold: 5, sale_count: 2 }),
            Some(3)
        );
        assert_eq!(
            days_until_stockout(0, &SalesVelocity { units_sold: 5, sale_count: 2 }),
            Some(0)
        );
        // 4 / 3 = 1.33
        assert_eq!(
            days_until_stockout(4, &SalesVelocity { units_sold: 9, sale_count: 3 }),
            Some(2)
        );
    }

    #[test]
    fn test_result_is_deterministic() {
        let builder = SnapshotBuilder::new(Some(10))
            .warehouse(3, COMPANY)
            .warehouse(1, COMPANY)
            .stock(3, 2)
            .stock(1, 5)
            .sale(1, 2, 3)
            .suppliers(3);

        let first = builder.run().unwrap();
        let second = builder.run().unwrap();
        assert_eq!(first, second);

        let order: Vec<_> = first
            .alerts
            .iter()
            .map(|a| (a.warehouse_id, a.supplier.id))
            .collect();
        assert_eq!(order, vec![(1, 1), (1, 2), (1, 3), (3, 1), (3, 2), (3, 3)]);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    /// Sale quantities within the window
    fn sales_strategy() -> impl Strategy<Value = Vec<(i32, i64)>> {
        prop::collection::vec((1i32..=50, 0i64..30), 1..15)
    }

    /// Sales that all fall outside the 30-day window
    fn stale_sales_strategy() -> impl Strategy<Value = Vec<(i32, i64)>> {
        prop::collection::vec((1i32..=50, 31i64..365), 0..15)
    }

    fn build(
        threshold: i32,
        stock: i32,
        suppliers: i32,
        sales: &[(i32, i64)],
    ) -> SnapshotBuilder {
        let mut builder = SnapshotBuilder::new(Some(threshold))
            .warehouse(1, COMPANY)
            .stock(1, stock)
            .suppliers(suppliers);
        for &(quantity, days_ago) in sales {
            builder = builder.sale(1, quantity, days_ago);
        }
        builder
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Products without recent sales never alert
        #[test]
        fn prop_non_sale_products_never_alert(
            threshold in 0i32..100,
            stock in 0i32..100,
            suppliers in 0i32..5,
            sales in stale_sales_strategy()
        ) {
            let response = build(threshold, stock, suppliers, &sales).run().unwrap();
            prop_assert!(response.alerts.is_empty());
        }

        /// Stock at or above threshold never alerts
        #[test]
        fn prop_stock_at_or_above_threshold_never_alerts(
            threshold in 0i32..100,
            extra in 0i32..100,
            suppliers in 0i32..5,
            sales in sales_strategy()
        ) {
            let response = build(threshold, threshold + extra, suppliers, &sales).run().unwrap();
            prop_assert_eq!(response.total_alerts, 0);
        }

        /// Low stock with recent sales alerts once per supplier, all with the same projection
        #[test]
        fn prop_one_alert_per_supplier(
            threshold in 1i32..100,
            stock_seed in 0i32..100,
            suppliers in 0i32..6,
            sales in sales_strategy()
        ) {
            let stock = stock_seed % threshold;
            let response = build(threshold, stock, suppliers, &sales).run().unwrap();

            prop_assert_eq!(response.alerts.len(), suppliers as usize);
            if let Some(first) = response.alerts.first() {
                prop_assert!(response
                    .alerts
                    .iter()
                    .all(|a| a.days_until_stockout == first.days_until_stockout));
            }
        }

        /// Projection is the exact ceiling of stock / mean sale quantity
        #[test]
        fn prop_projection_is_ceiling(
            threshold in 1i32..100,
            stock_seed in 0i32..100,
            sales in sales_strategy()
        ) {
            let stock = stock_seed % threshold;
            let response = build(threshold, stock, 1, &sales).run().unwrap();
            prop_assert_eq!(response.total_alerts, 1);

            let days = response.alerts[0].days_until_stockout as i64;
            let units: i64 = sales.iter().map(|&(q, _)| i64::from(q)).sum();
            let count = sales.len() as i64;
            let supply = i64::from(stock) * count;

            // days is the smallest integer with days * mean >= stock
            prop_assert!(days >= 0);
            prop_assert!(days * units >= supply);
            if days > 0 {
                prop_assert!((days - 1) * units < supply);
            }
        }

        /// total_alerts always equals the number of alerts
        #[test]
        fn prop_total_matches_len(
            threshold in 0i32..100,
            stock in 0i32..100,
            suppliers in 0i32..5,
            sales in prop::collection::vec((0i32..=50, 0i64..90), 0..15)
        ) {
            let response = build(threshold, stock, suppliers, &sales).run().unwrap();
            prop_assert_eq!(response.total_alerts, response.alerts.len());
        }

        /// Projections are never negative, even for corrupt negative stock
        #[test]
        fn prop_negative_stock_projects_zero(
            stock in -100i32..0,
            sales in sales_strategy()
        ) {
            let response = build(10, stock, 1, &sales).run().unwrap();
            prop_assert_eq!(response.total_alerts, 1);
            prop_assert_eq!(response.alerts[0].days_until_stockout, 0);
        }
    }
}

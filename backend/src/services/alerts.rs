//! Low-stock alert service
//!
//! Loads a consistent company snapshot and hands it to the pure alerting
//! computation in `shared::alerts`.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use shared::alerts::{compute_low_stock_alerts, AlertPolicy, CompanySnapshot};
use shared::types::CompanyId;
use shared::validate_id;

use crate::error::{AppError, AppResult};
use crate::models::{
    InventoryRow, LowStockAlertResponse, ProductRow, ProductSupplierRow, SaleRow, SupplierRow,
    WarehouseRow,
};

#[derive(Clone)]
pub struct AlertService {
    db: PgPool,
    policy: AlertPolicy,
}

impl AlertService {
    /// Create a new AlertService with the default 30-day sales window
    pub fn new(db: PgPool) -> Self {
        Self {
            db,
            policy: AlertPolicy::default(),
        }
    }

    /// Low-stock alerts for a company as of now
    pub async fn low_stock_alerts(&self, company_id: CompanyId) -> AppResult<LowStockAlertResponse> {
        self.low_stock_alerts_at(company_id, Utc::now()).await
    }

    /// Low-stock alerts for a company as of `now`.
    ///
    /// An unknown company has no warehouses and therefore no alerts.
    pub async fn low_stock_alerts_at(
        &self,
        company_id: CompanyId,
        now: DateTime<Utc>,
    ) -> AppResult<LowStockAlertResponse> {
        validate_id(company_id).map_err(|msg| AppError::invalid("company_id", msg))?;

        let window = self.policy.sales_window(now);
        let snapshot = self.load_snapshot(company_id, window.start).await?;
        let response = compute_low_stock_alerts(&snapshot, now, &self.policy)?;

        tracing::info!(
            company_id,
            warehouses = snapshot.warehouses.len(),
            inventory_rows = snapshot.inventory.len(),
            recent_sales = snapshot.sales.len(),
            total_alerts = response.total_alerts,
            "Computed low-stock alerts"
        );

        Ok(response)
    }

    /// Read every relation the computation needs inside one
    /// repeatable-read transaction so concurrent writes are never seen
    /// half-applied.
    async fn load_snapshot(
        &self,
        company_id: CompanyId,
        sales_since: DateTime<Utc>,
    ) -> AppResult<CompanySnapshot> {
        let mut tx = self.db.begin().await?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let warehouses = sqlx::query_as::<_, WarehouseRow>(
            r#"
            SELECT id, company_id, name
            FROM warehouses
            WHERE company_id = $1
            "#,
        )
        .bind(company_id)
        .fetch_all(&mut *tx)
        .await?;

        let inventory = sqlx::query_as::<_, InventoryRow>(
            r#"
            SELECT i.product_id, i.warehouse_id, i.quantity
            FROM inventory i
            JOIN warehouses w ON w.id = i.warehouse_id
            WHERE w.company_id = $1
            "#,
        )
        .bind(company_id)
        .fetch_all(&mut *tx)
        .await?;

        let products = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT p.id, p.name, p.sku, p.price, p.low_stock_threshold, p.is_bundle
            FROM products p
            WHERE p.id IN (
                SELECT i.product_id
                FROM inventory i
                JOIN warehouses w ON w.id = i.warehouse_id
                WHERE w.company_id = $1
            )
            "#,
        )
        .bind(company_id)
        .fetch_all(&mut *tx)
        .await?;

        let sales = sqlx::query_as::<_, SaleRow>(
            r#"
            SELECT s.id, s.product_id, s.warehouse_id, s.quantity, s.timestamp
            FROM sales s
            JOIN warehouses w ON w.id = s.warehouse_id
            WHERE w.company_id = $1 AND s.timestamp >= $2
            "#,
        )
        .bind(company_id)
        .bind(sales_since)
        .fetch_all(&mut *tx)
        .await?;

        let product_suppliers = sqlx::query_as::<_, ProductSupplierRow>(
            r#"
            SELECT ps.product_id, ps.supplier_id
            FROM product_suppliers ps
            WHERE ps.product_id IN (
                SELECT i.product_id
                FROM inventory i
                JOIN warehouses w ON w.id = i.warehouse_id
                WHERE w.company_id = $1
            )
            "#,
        )
        .bind(company_id)
        .fetch_all(&mut *tx)
        .await?;

        let suppliers = sqlx::query_as::<_, SupplierRow>(
            r#"
            SELECT s.id, s.name, s.contact_email
            FROM suppliers s
            WHERE s.id IN (
                SELECT ps.supplier_id
                FROM product_suppliers ps
                JOIN inventory i ON i.product_id = ps.product_id
                JOIN warehouses w ON w.id = i.warehouse_id
                WHERE w.company_id = $1
            )
            "#,
        )
        .bind(company_id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(CompanySnapshot {
            company_id,
            warehouses: warehouses.into_iter().map(Into::into).collect(),
            products: products.into_iter().map(Into::into).collect(),
            inventory: inventory.into_iter().map(Into::into).collect(),
            sales: sales.into_iter().map(Into::into).collect(),
            suppliers: suppliers.into_iter().map(Into::into).collect(),
            product_suppliers: product_suppliers.into_iter().map(Into::into).collect(),
        })
    }
}

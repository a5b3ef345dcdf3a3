//! Inventory service for stock adjustments and change history

use serde::Deserialize;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::{ChangeType, InventoryChange, InventoryChangeRow, InventoryLevel};

/// Inventory service for recording stock movements
#[derive(Clone)]
pub struct InventoryService {
    db: PgPool,
}

/// Input for adjusting stock of a (product, warehouse) pair
#[derive(Debug, Deserialize)]
pub struct AdjustInventoryInput {
    pub product_id: i32,
    pub warehouse_id: i32,
    pub quantity_change: i32,
    pub change_type: ChangeType,
}

/// Apply a signed change to a current quantity, refusing to go below zero
pub fn apply_change(current: i32, change: i32) -> AppResult<i32> {
    let updated = current
        .checked_add(change)
        .ok_or_else(|| AppError::invalid("quantity_change", "Quantity change out of range"))?;

    if updated < 0 {
        return Err(AppError::InsufficientInventory(format!(
            "Cannot remove {} units, only {} in stock",
            change.unsigned_abs(),
            current
        )));
    }

    Ok(updated)
}

/// Units a movement records as sold: a `sale` must remove stock, every
/// other change type sells nothing.
pub fn units_sold(change_type: ChangeType, change: i32) -> AppResult<Option<i32>> {
    if change_type != ChangeType::Sale {
        return Ok(None);
    }
    if change > 0 {
        return Err(AppError::invalid(
            "quantity_change",
            "A sale must remove stock",
        ));
    }
    i32::try_from(change.unsigned_abs())
        .map(Some)
        .map_err(|_| AppError::invalid("quantity_change", "Quantity change out of range"))
}

impl InventoryService {
    /// Create a new InventoryService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Adjust stock and append a history entry in one transaction
    pub async fn adjust(&self, input: AdjustInventoryInput) -> AppResult<InventoryLevel> {
        if input.quantity_change == 0 {
            return Err(AppError::invalid(
                "quantity_change",
                "Quantity change must not be zero",
            ));
        }

        let mut tx = self.db.begin().await?;

        let current = sqlx::query_scalar::<_, i32>(
            r#"
            SELECT quantity FROM inventory
            WHERE product_id = $1 AND warehouse_id = $2
            FOR UPDATE
            "#,
        )
        .bind(input.product_id)
        .bind(input.warehouse_id)
        .fetch_optional(&mut *tx)
        .await?;

        if current.is_none() {
            // First movement for this pair; both sides must exist
            let exists = sqlx::query_scalar::<_, bool>(
                r#"
                SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)
                   AND EXISTS(SELECT 1 FROM warehouses WHERE id = $2)
                "#,
            )
            .bind(input.product_id)
            .bind(input.warehouse_id)
            .fetch_one(&mut *tx)
            .await?;

            if !exists {
                return Err(AppError::NotFound("Product or warehouse".to_string()));
            }
        }

        let sold = units_sold(input.change_type, input.quantity_change)?;
        let quantity = apply_change(current.unwrap_or(0), input.quantity_change)?;

        sqlx::query(
            r#"
            INSERT INTO inventory (product_id, warehouse_id, quantity)
            VALUES ($1, $2, $3)
            ON CONFLICT (product_id, warehouse_id) DO UPDATE SET quantity = EXCLUDED.quantity
            "#,
        )
        .bind(input.product_id)
        .bind(input.warehouse_id)
        .bind(quantity)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO inventory_changes (product_id, warehouse_id, quantity_change, change_type)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(input.product_id)
        .bind(input.warehouse_id)
        .bind(input.quantity_change)
        .bind(input.change_type.as_str())
        .execute(&mut *tx)
        .await?;

        // Sales feed the velocity estimate
        if let Some(sold) = sold {
            sqlx::query(
                r#"
                INSERT INTO sales (product_id, warehouse_id, quantity)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(input.product_id)
            .bind(input.warehouse_id)
            .bind(sold)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        tracing::debug!(
            product_id = input.product_id,
            warehouse_id = input.warehouse_id,
            change = input.quantity_change,
            change_type = %input.change_type,
            quantity,
            "Inventory adjusted"
        );

        Ok(InventoryLevel {
            product_id: input.product_id,
            warehouse_id: input.warehouse_id,
            quantity,
        })
    }

    /// Change history for a (product, warehouse) pair, newest first
    pub async fn list_changes(
        &self,
        product_id: i32,
        warehouse_id: i32,
    ) -> AppResult<Vec<InventoryChange>> {
        let rows = sqlx::query_as::<_, InventoryChangeRow>(
            r#"
            SELECT id, product_id, warehouse_id, quantity_change, change_type, change_time
            FROM inventory_changes
            WHERE product_id = $1 AND warehouse_id = $2
            ORDER BY change_time DESC, id DESC
            "#,
        )
        .bind(product_id)
        .bind(warehouse_id)
        .fetch_all(&self.db)
        .await?;

        rows.into_iter()
            .map(|row| InventoryChange::try_from(row).map_err(AppError::Internal))
            .collect()
    }
}

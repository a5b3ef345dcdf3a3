//! Supplier management service

use serde::Deserialize;
use sqlx::PgPool;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::{Supplier, SupplierRow};

#[derive(Clone)]
pub struct SupplierService {
    db: PgPool,
}

/// Input for creating a supplier
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSupplierInput {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub contact_email: Option<String>,
}

impl SupplierService {
    /// Create a new SupplierService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Create a supplier
    pub async fn create_supplier(&self, input: CreateSupplierInput) -> AppResult<Supplier> {
        input.validate()?;
        if let Some(email) = &input.contact_email {
            shared::validate_email(email).map_err(|msg| AppError::invalid("contact_email", msg))?;
        }

        let row = sqlx::query_as::<_, SupplierRow>(
            r#"
            INSERT INTO suppliers (name, contact_email)
            VALUES ($1, $2)
            RETURNING id, name, contact_email
            "#,
        )
        .bind(&input.name)
        .bind(&input.contact_email)
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    /// Link a supplier to a product. Linking twice is a no-op.
    pub async fn link_product(&self, product_id: i32, supplier_id: i32) -> AppResult<()> {
        let product_exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)",
        )
        .bind(product_id)
        .fetch_one(&self.db)
        .await?;

        if !product_exists {
            return Err(AppError::NotFound("Product".to_string()));
        }

        let supplier_exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM suppliers WHERE id = $1)",
        )
        .bind(supplier_id)
        .fetch_one(&self.db)
        .await?;

        if !supplier_exists {
            return Err(AppError::NotFound("Supplier".to_string()));
        }

        sqlx::query(
            r#"
            INSERT INTO product_suppliers (product_id, supplier_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(product_id)
        .bind(supplier_id)
        .execute(&self.db)
        .await?;

        Ok(())
    }
}

//! Product catalog service

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use validator::Validate;

use crate::error::{map_unique_violation, AppError, AppResult};
use crate::models::{
    ChangeType, Product, ProductRow, Supplier, SupplierRow, DEFAULT_LOW_STOCK_THRESHOLD,
};

/// Product catalog service
#[derive(Clone)]
pub struct ProductService {
    db: PgPool,
}

/// Input for creating a product with its initial stock
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProductInput {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub sku: String,
    pub price: Decimal,
    #[validate(range(min = 1))]
    pub warehouse_id: i32,
    pub initial_quantity: i32,
    pub low_stock_threshold: Option<i32>,
    pub is_bundle: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct CreatedProduct {
    pub message: String,
    pub product_id: i32,
}

/// Product with its supplier relationships
#[derive(Debug, Serialize)]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: Product,
    pub low_stock_threshold_effective: i32,
    pub suppliers: Vec<Supplier>,
}

impl ProductService {
    /// Create a new ProductService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Create a product and its initial inventory row atomically
    pub async fn create_product(&self, input: CreateProductInput) -> AppResult<CreatedProduct> {
        input.validate()?;
        shared::validate_sku(&input.sku).map_err(|msg| AppError::invalid("sku", msg))?;
        shared::validate_price(input.price).map_err(|msg| AppError::invalid("price", msg))?;
        shared::validate_quantity(input.initial_quantity)
            .map_err(|msg| AppError::invalid("initial_quantity", msg))?;
        if let Some(threshold) = input.low_stock_threshold {
            shared::validate_threshold(threshold)
                .map_err(|msg| AppError::invalid("low_stock_threshold", msg))?;
        }

        let warehouse_exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM warehouses WHERE id = $1)",
        )
        .bind(input.warehouse_id)
        .fetch_one(&self.db)
        .await?;

        if !warehouse_exists {
            return Err(AppError::NotFound("Warehouse".to_string()));
        }

        let sku_taken = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM products WHERE sku = $1)",
        )
        .bind(&input.sku)
        .fetch_one(&self.db)
        .await?;

        if sku_taken {
            return Err(AppError::DuplicateEntry("sku".to_string()));
        }

        let mut tx = self.db.begin().await?;

        let product_id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO products (name, sku, price, low_stock_threshold, is_bundle)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&input.name)
        .bind(&input.sku)
        .bind(input.price)
        .bind(input.low_stock_threshold.unwrap_or(DEFAULT_LOW_STOCK_THRESHOLD))
        .bind(input.is_bundle.unwrap_or(false))
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, "sku"))?;

        sqlx::query(
            r#"
            INSERT INTO inventory (product_id, warehouse_id, quantity)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(product_id)
        .bind(input.warehouse_id)
        .bind(input.initial_quantity)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO inventory_changes (product_id, warehouse_id, quantity_change, change_type)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(product_id)
        .bind(input.warehouse_id)
        .bind(input.initial_quantity)
        .bind(ChangeType::InitialStock.as_str())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(product_id, sku = %input.sku, warehouse_id = input.warehouse_id, "Product created");

        Ok(CreatedProduct {
            message: "Product created".to_string(),
            product_id,
        })
    }

    /// Get a product with its suppliers
    pub async fn get_product(&self, product_id: i32) -> AppResult<ProductDetail> {
        let product: Product = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, sku, price, low_stock_threshold, is_bundle
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(product_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Product".to_string()))?
        .into();

        let suppliers = sqlx::query_as::<_, SupplierRow>(
            r#"
            SELECT s.id, s.name, s.contact_email
            FROM suppliers s
            JOIN product_suppliers ps ON ps.supplier_id = s.id
            WHERE ps.product_id = $1
            ORDER BY s.id
            "#,
        )
        .bind(product_id)
        .fetch_all(&self.db)
        .await?;

        Ok(ProductDetail {
            low_stock_threshold_effective: product.effective_threshold(),
            product,
            suppliers: suppliers.into_iter().map(Into::into).collect(),
        })
    }
}

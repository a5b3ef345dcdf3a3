//! Product catalog models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// Threshold applied when a product has none configured
pub const DEFAULT_LOW_STOCK_THRESHOLD: i32 = 10;

/// A catalog entry. Products are global, not per company.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unique across the catalog
    pub sku: String,
    pub price: Decimal,
    #[serde(default)]
    pub low_stock_threshold: Option<i32>,
    #[serde(default)]
    pub is_bundle: bool,
}

impl Product {
    /// Configured threshold, or the default when unset
    pub fn effective_threshold(&self) -> i32 {
        self.low_stock_threshold
            .unwrap_or(DEFAULT_LOW_STOCK_THRESHOLD)
    }

    /// Stock strictly below the threshold counts as low
    pub fn is_low_stock(&self, quantity: i32) -> bool {
        quantity < self.effective_threshold()
    }
}

//! Inventory level and history models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{ProductId, WarehouseId};

/// Current stock for a (product, warehouse) pair.
///
/// The store keeps at most one row per pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct InventoryLevel {
    pub product_id: ProductId,
    pub warehouse_id: WarehouseId,
    pub quantity: i32,
}

/// Reason recorded with an inventory change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    InitialStock,
    Restock,
    Sale,
    Adjustment,
    Transfer,
    Return,
    Damage,
}

impl ChangeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeType::InitialStock => "initial_stock",
            ChangeType::Restock => "restock",
            ChangeType::Sale => "sale",
            ChangeType::Adjustment => "adjustment",
            ChangeType::Transfer => "transfer",
            ChangeType::Return => "return",
            ChangeType::Damage => "damage",
        }
    }
}

impl std::fmt::Display for ChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ChangeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "initial_stock" => Ok(ChangeType::InitialStock),
            "restock" => Ok(ChangeType::Restock),
            "sale" => Ok(ChangeType::Sale),
            "adjustment" => Ok(ChangeType::Adjustment),
            "transfer" => Ok(ChangeType::Transfer),
            "return" => Ok(ChangeType::Return),
            "damage" => Ok(ChangeType::Damage),
            other => Err(format!("Unknown change type: {}", other)),
        }
    }
}

/// Append-only history entry for a stock movement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryChange {
    pub id: i32,
    pub product_id: ProductId,
    pub warehouse_id: WarehouseId,
    pub quantity_change: i32,
    pub change_type: ChangeType,
    pub change_time: DateTime<Utc>,
}

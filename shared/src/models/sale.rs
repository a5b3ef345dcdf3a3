//! Sales history

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{ProductId, WarehouseId};

/// An immutable sale fact
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sale {
    pub id: i32,
    pub product_id: ProductId,
    pub warehouse_id: WarehouseId,
    pub quantity: i32,
    pub timestamp: DateTime<Utc>,
}

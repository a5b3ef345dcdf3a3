//! Warehouse model

use serde::{Deserialize, Serialize};

use crate::types::{CompanyId, WarehouseId};

/// A stock location owned by exactly one company
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Warehouse {
    pub id: WarehouseId,
    pub company_id: CompanyId,
    pub name: String,
}

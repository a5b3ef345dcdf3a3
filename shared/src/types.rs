//! Common types used across the platform

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Company identifier; every alert query is scoped by one
pub type CompanyId = i32;

pub type WarehouseId = i32;

pub type ProductId = i32;

pub type SupplierId = i32;

/// Open-ended time range `[start, ..)` used for sales queries.
///
/// Timestamps after the current clock still fall inside.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
}

impl TimeRange {
    pub fn since(start: DateTime<Utc>) -> Self {
        Self { start }
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        at >= self.start
    }
}

//! Low-stock alerting with days-until-stockout projection
//!
//! Pipeline over a [`CompanySnapshot`]:
//! 1. [`estimate_velocities`] - mean units per sale, company-wide, trailing window
//! 2. [`low_stock_candidates`] - pairs strictly below threshold with a velocity,
//!    each projected with [`days_until_stockout`]
//! 3. [`fan_out_suppliers`] - one row per linked supplier
//! 4. [`assemble_alerts`] - response with `total_alerts`
//!
//! Everything here is pure and synchronous.

mod assembler;
mod error;
mod fanout;
mod filter;
mod projection;
mod snapshot;
mod velocity;

use chrono::{DateTime, Duration, Utc};

use crate::models::LowStockAlertResponse;
use crate::types::TimeRange;

pub use assembler::assemble_alerts;
pub use error::AlertError;
pub use fanout::{fan_out_suppliers, SupplierAlertRow};
pub use filter::{low_stock_candidates, LowStockCandidate};
pub use projection::days_until_stockout;
pub use snapshot::CompanySnapshot;
pub use velocity::{estimate_velocities, SalesVelocity};

/// Length of the trailing sales window
pub const SALES_WINDOW_DAYS: i64 = 30;

/// Parameters of the alert computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertPolicy {
    pub sales_window: Duration,
}

impl Default for AlertPolicy {
    fn default() -> Self {
        Self {
            sales_window: Duration::days(SALES_WINDOW_DAYS),
        }
    }
}

impl AlertPolicy {
    /// Sales counted toward velocity: `timestamp >= now - window`.
    ///
    /// A window reaching past the earliest representable instant starts there.
    pub fn sales_window(&self, now: DateTime<Utc>) -> TimeRange {
        let start = now
            .checked_sub_signed(self.sales_window)
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        TimeRange::since(start)
    }
}

/// Compute the low-stock alerts for the snapshot's company as of `now`
pub fn compute_low_stock_alerts(
    snapshot: &CompanySnapshot,
    now: DateTime<Utc>,
    policy: &AlertPolicy,
) -> Result<LowStockAlertResponse, AlertError> {
    let velocities = estimate_velocities(snapshot, &policy.sales_window(now));
    let candidates = low_stock_candidates(snapshot, &velocities)?;
    let rows = fan_out_suppliers(candidates, snapshot);

    Ok(assemble_alerts(rows))
}

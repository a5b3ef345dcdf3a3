//! Days-until-stockout projection

use super::velocity::SalesVelocity;

/// Whole days of supply left at `velocity`, rounded up.
///
/// Computed as `ceil(quantity * sale_count / units_sold)` in integer
/// arithmetic so the result matches the exact real-valued ceiling.
/// Quantity at or below zero projects to 0, as does a velocity that is not
/// positive. Returns `None` only when the result does not fit in `u64`.
pub fn days_until_stockout(quantity: i32, velocity: &SalesVelocity) -> Option<u64> {
    if quantity <= 0 || !velocity.is_positive() {
        return Some(0);
    }

    let numerator = i128::from(quantity) * i128::from(velocity.sale_count);
    let denominator = i128::from(velocity.units_sold);
    let days = (numerator + denominator - 1) / denominator;

    u64::try_from(days).ok()
}

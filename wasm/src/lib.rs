//! WebAssembly module for the Stockwatch inventory platform
//!
//! Provides client-side computation for:
//! - Days-until-stockout projection
//! - Low-stock alerts over a snapshot fetched for offline dashboards

use chrono::{DateTime, Utc};
use wasm_bindgen::prelude::*;

use shared::alerts::{self, AlertPolicy, CompanySnapshot, SalesVelocity};

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;

/// Days of supply left for `quantity` units when `sale_count` recent sales
/// moved `units_sold` units in total. Returns -1 when there is no estimate.
#[wasm_bindgen]
pub fn project_days_until_stockout(quantity: i32, units_sold: i32, sale_count: u32) -> f64 {
    if sale_count == 0 {
        return -1.0;
    }
    let velocity = SalesVelocity {
        units_sold: i64::from(units_sold),
        sale_count: i64::from(sale_count),
    };
    alerts::days_until_stockout(quantity, &velocity).map_or(-1.0, |days| days as f64)
}

/// Compute low-stock alerts for a JSON snapshot as of the browser clock
#[wasm_bindgen]
pub fn compute_low_stock_alerts(snapshot_json: &str) -> Result<String, JsValue> {
    compute_low_stock_alerts_at(snapshot_json, js_sys::Date::now())
}

/// Compute low-stock alerts for a JSON snapshot as of `now_millis` (Unix epoch ms)
#[wasm_bindgen]
pub fn compute_low_stock_alerts_at(snapshot_json: &str, now_millis: f64) -> Result<String, JsValue> {
    timestamp_from_millis(now_millis)
        .and_then(|now| alerts_json(snapshot_json, now))
        .map_err(|e| {
            web_sys::console::warn_1(&JsValue::from_str(&e));
            JsValue::from_str(&e)
        })
}

fn timestamp_from_millis(millis: f64) -> Result<DateTime<Utc>, String> {
    if !millis.is_finite() {
        return Err(format!("Invalid timestamp: {}", millis));
    }
    DateTime::<Utc>::from_timestamp_millis(millis as i64)
        .ok_or_else(|| format!("Timestamp out of range: {}", millis))
}

fn alerts_json(snapshot_json: &str, now: DateTime<Utc>) -> Result<String, String> {
    let snapshot: CompanySnapshot = serde_json::from_str(snapshot_json)
        .map_err(|e| format!("Invalid snapshot JSON: {}", e))?;

    let response = alerts::compute_low_stock_alerts(&snapshot, now, &AlertPolicy::default())
        .map_err(|e| e.to_string())?;

    serde_json::to_string(&response).map_err(|e| format!("Failed to encode alerts: {}", e))
}

//! Liveness endpoint with a database ping

use std::time::{Duration, Instant};

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub version: &'static str,
    pub environment: String,
    pub database: DatabaseHealth,
}

#[derive(Debug, Serialize)]
pub struct DatabaseHealth {
    pub reachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

impl HealthReport {
    /// `ping` is the round-trip of `SELECT 1`, `None` when it failed
    pub fn new(environment: &str, ping: Option<Duration>) -> Self {
        Self {
            status: if ping.is_some() { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            environment: environment.to_string(),
            database: DatabaseHealth {
                reachable: ping.is_some(),
                latency_ms: ping.map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX)),
            },
        }
    }

    /// 503 while the database is unreachable
    pub fn status_code(&self) -> StatusCode {
        if self.database.reachable {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let started = Instant::now();
    let ping = match sqlx::query("SELECT 1").execute(&state.db).await {
        Ok(_) => Some(started.elapsed()),
        Err(err) => {
            tracing::warn!(error = %err, "Database ping failed");
            None
        }
    };

    let report = HealthReport::new(&state.config.environment, ping);
    (report.status_code(), Json(report))
}

//! Shared types and models for the Stockwatch inventory platform
//!
//! This crate contains the domain models and the pure low-stock alerting
//! computation used by the backend server and the WASM client module.

pub mod alerts;
pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;

//! HTTP handlers for the Stockwatch API

pub mod alerts;
pub mod health;
pub mod inventory;
pub mod product;
pub mod supplier;

pub use alerts::*;
pub use health::*;
pub use inventory::*;
pub use product::*;
pub use supplier::*;

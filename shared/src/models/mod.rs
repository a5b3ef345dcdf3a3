//! Domain models for the inventory alerting platform

pub mod alert;
pub mod company;
pub mod inventory;
pub mod product;
pub mod sale;
pub mod supplier;

pub use alert::*;
pub use company::*;
pub use inventory::*;
pub use product::*;
pub use sale::*;
pub use supplier::*;

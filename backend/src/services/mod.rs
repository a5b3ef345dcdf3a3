//! Business logic services for the Stockwatch server

pub mod alerts;
pub mod inventory;
pub mod product;
pub mod supplier;

pub use alerts::AlertService;
pub use inventory::InventoryService;
pub use product::ProductService;
pub use supplier::SupplierService;

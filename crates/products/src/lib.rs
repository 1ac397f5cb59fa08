//! Products domain module.
//!
//! Catalog products and the stock-check capability they delegate to. Stock is
//! never stored locally; every check asks the injected inventory.

pub mod inventory;
pub mod product;

pub use inventory::{InMemoryInventory, Inventory, InventoryLookup};
pub use product::Product;

//! Inventory capability: live stock answers keyed by SKU.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::product::Product;

/// Stock lookup backed by whatever system owns inventory.
///
/// Implementations must answer from live state; callers never cache.
pub trait InventoryLookup: Send + Sync {
    fn is_in_stock(&self, sku: &str) -> bool;
}

/// Product-level facade over an [`InventoryLookup`].
#[derive(Clone)]
pub struct Inventory {
    lookup: Arc<dyn InventoryLookup>,
}

impl Inventory {
    pub fn new(lookup: Arc<dyn InventoryLookup>) -> Self {
        Self { lookup }
    }

    pub fn is_in_stock(&self, product: &Product) -> bool {
        self.lookup.is_in_stock(product.sku())
    }
}

impl core::fmt::Debug for Inventory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Inventory").finish_non_exhaustive()
    }
}

/// In-memory stock table.
///
/// Intended for tests/dev. Unknown SKUs are reported as out of stock. A
/// poisoned lock is recovered; the table holds plain values only.
#[derive(Debug, Default)]
pub struct InMemoryInventory {
    stock: RwLock<HashMap<String, bool>>,
}

impl InMemoryInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table where every listed SKU is in stock.
    pub fn stocked<I, S>(skus: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stock = skus.into_iter().map(|sku| (sku.into(), true)).collect();
        Self {
            stock: RwLock::new(stock),
        }
    }

    pub fn set_in_stock(&self, sku: impl Into<String>, in_stock: bool) {
        self.stock
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(sku.into(), in_stock);
    }
}

impl InventoryLookup for InMemoryInventory {
    fn is_in_stock(&self, sku: &str) -> bool {
        self.stock
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(sku)
            .copied()
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn unknown_sku_is_out_of_stock() {
        let inventory = InMemoryInventory::new();
        assert!(!inventory.is_in_stock("1234"));
    }

    #[test]
    fn stock_changes_are_visible_immediately() {
        let inventory = InMemoryInventory::stocked(["1234"]);
        assert!(inventory.is_in_stock("1234"));

        inventory.set_in_stock("1234", false);
        assert!(!inventory.is_in_stock("1234"));
    }

    #[test]
    fn facade_checks_product_by_sku() {
        let lookup = Arc::new(InMemoryInventory::stocked(["1234"]));
        let inventory = Inventory::new(lookup.clone());

        let stocked = Product::new("1234", dec!(1), lookup.clone());
        let missing = Product::new("2345", dec!(1), lookup);

        assert!(inventory.is_in_stock(&stocked));
        assert!(!inventory.is_in_stock(&missing));
    }

    #[test]
    fn writes_survive_a_poisoned_lock() {
        let inventory = Arc::new(InMemoryInventory::stocked(["1234"]));
        let poisoner = inventory.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.stock.write().unwrap();
            panic!("poison the stock table");
        })
        .join();
        assert!(inventory.stock.is_poisoned());

        inventory.set_in_stock("2345", true);
        assert!(inventory.is_in_stock("1234"));
        assert!(inventory.is_in_stock("2345"));
    }
}

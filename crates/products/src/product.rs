use std::sync::Arc;

use rust_decimal::Decimal;

use orderentry_core::{Entity, ProductId};

use crate::inventory::InventoryLookup;

/// Catalog product.
///
/// Carries its catalog attributes plus the inventory it asks for stock. The
/// SKU identifies the product within an order.
#[derive(Clone)]
pub struct Product {
    id: Option<ProductId>,
    sku: String,
    name: String,
    description: String,
    price: Decimal,
    inventory: Arc<dyn InventoryLookup>,
}

impl Product {
    pub fn new(sku: impl Into<String>, price: Decimal, inventory: Arc<dyn InventoryLookup>) -> Self {
        Self {
            id: None,
            sku: sku.into(),
            name: String::new(),
            description: String::new(),
            price,
            inventory,
        }
    }

    pub fn with_id(mut self, id: ProductId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn product_id(&self) -> Option<ProductId> {
        self.id
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Ask the inventory whether this SKU is in stock. Never cached.
    pub fn is_in_stock(&self) -> bool {
        self.inventory.is_in_stock(&self.sku)
    }
}

impl Entity for Product {
    type Id = Option<ProductId>;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Debug for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Product")
            .field("id", &self.id)
            .field("sku", &self.sku)
            .field("name", &self.name)
            .field("description", &self.description)
            .field("price", &self.price)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::InMemoryInventory;
    use rust_decimal_macros::dec;

    #[test]
    fn builder_sets_catalog_fields() {
        let inventory = Arc::new(InMemoryInventory::new());
        let product = Product::new("1234", dec!(18), inventory)
            .with_id(ProductId::new(9))
            .with_name("Lagunitas IPA")
            .with_description("six pack");

        assert_eq!(product.id(), &Some(ProductId::new(9)));
        assert_eq!(product.sku(), "1234");
        assert_eq!(product.name(), "Lagunitas IPA");
        assert_eq!(product.description(), "six pack");
        assert_eq!(product.price(), dec!(18));
    }

    #[test]
    fn stock_check_reflects_live_inventory() {
        let inventory = Arc::new(InMemoryInventory::stocked(["1234"]));
        let product = Product::new("1234", dec!(18), inventory.clone());
        assert!(product.is_in_stock());

        inventory.set_in_stock("1234", false);
        assert!(!product.is_in_stock());
    }

    #[test]
    fn debug_omits_inventory() {
        let product = Product::new("1234", dec!(1), Arc::new(InMemoryInventory::new()));
        let rendered = format!("{product:?}");
        assert!(rendered.contains("sku: \"1234\""));
        assert!(!rendered.contains("InMemoryInventory"));
    }
}

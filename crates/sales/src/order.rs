use std::collections::HashSet;

use rust_decimal::Decimal;

use orderentry_core::{CustomerId, DomainError, DomainResult};
use orderentry_products::Product;

/// Order line: product and quantity.
#[derive(Debug, Clone)]
pub struct OrderItem {
    product: Product,
    quantity: Decimal,
}

impl OrderItem {
    pub fn new(product: Product, quantity: Decimal) -> Self {
        Self { product, quantity }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn sku(&self) -> &str {
        self.product.sku()
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// `quantity × unit price`, exact. Fails instead of wrapping past
    /// `Decimal::MAX`.
    pub fn line_total(&self) -> DomainResult<Decimal> {
        self.quantity
            .checked_mul(self.product.price())
            .ok_or_else(|| DomainError::overflow(format!("line total for sku {}", self.sku())))
    }

    pub fn is_in_stock(&self) -> bool {
        self.product.is_in_stock()
    }
}

/// Order awaiting placement.
///
/// Built empty and filled by the caller. Placement reads it by reference and
/// never mutates it.
#[derive(Debug, Clone, Default)]
pub struct Order {
    customer_id: Option<CustomerId>,
    items: Vec<OrderItem>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_customer(customer_id: CustomerId) -> Self {
        Self {
            customer_id: Some(customer_id),
            items: Vec::new(),
        }
    }

    pub fn with_items(customer_id: Option<CustomerId>, items: Vec<OrderItem>) -> Self {
        Self { customer_id, items }
    }

    pub fn customer_id(&self) -> Option<CustomerId> {
        self.customer_id
    }

    pub fn set_customer_id(&mut self, customer_id: Option<CustomerId>) {
        self.customer_id = customer_id;
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn add_item(&mut self, product: Product, quantity: Decimal) {
        self.items.push(OrderItem::new(product, quantity));
    }

    /// True when no two lines share a SKU.
    pub fn items_are_unique(&self) -> bool {
        let skus: HashSet<&str> = self.items.iter().map(OrderItem::sku).collect();
        skus.len() == self.items.len()
    }

    /// True when every line is in stock. Vacuously true for an empty order.
    pub fn all_products_in_stock(&self) -> bool {
        self.items.iter().all(OrderItem::is_in_stock)
    }

    /// Older name for [`Order::items_are_unique`].
    pub fn is_valid(&self) -> bool {
        self.items_are_unique()
    }

    /// Sum of line totals before tax.
    pub fn net_total(&self) -> DomainResult<Decimal> {
        self.items.iter().try_fold(Decimal::ZERO, |acc, item| {
            acc.checked_add(item.line_total()?)
                .ok_or_else(|| DomainError::overflow("order net total"))
        })
    }
}

//! Pre-placement order checks.
//!
//! Reasons are accumulated in a fixed order: a missing order short-circuits,
//! otherwise the SKU check comes first and the stock check second.

use orderentry_core::{DomainError, DomainResult};

use crate::order::Order;

/// Why an order was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionReason {
    OrderMissing,
    SkusNotUnique,
    ProductsOutOfStock,
}

impl RejectionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectionReason::OrderMissing => "Order is null",
            RejectionReason::SkusNotUnique => "Order skus are not unique",
            RejectionReason::ProductsOutOfStock => "Some products are not in stock",
        }
    }
}

impl core::fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reasons the order cannot be placed, in reporting order. Empty means valid.
pub fn rejection_reasons(order: Option<&Order>) -> Vec<RejectionReason> {
    let Some(order) = order else {
        return vec![RejectionReason::OrderMissing];
    };

    let mut reasons = Vec::new();
    if !order.items_are_unique() {
        reasons.push(RejectionReason::SkusNotUnique);
    }
    if !order.all_products_in_stock() {
        reasons.push(RejectionReason::ProductsOutOfStock);
    }
    reasons
}

/// Validate an order, handing it back when it can be placed.
pub fn validate_order(order: Option<&Order>) -> DomainResult<&Order> {
    let reasons = rejection_reasons(order);
    match order {
        Some(order) if reasons.is_empty() => Ok(order),
        _ => Err(DomainError::invalid_order(reasons)),
    }
}

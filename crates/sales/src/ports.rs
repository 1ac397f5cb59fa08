//! Collaborator capabilities consumed by order placement.
//!
//! Each trait is the narrow contract of one external system. Failures are
//! reported as `anyhow::Error` and passed to the caller untouched.

use orderentry_core::{CustomerId, OrderId};

use crate::order::Order;
use crate::summary::Fulfillment;
use crate::tax::TaxEntry;

pub use orderentry_parties::CustomerDirectory;
pub use orderentry_products::InventoryLookup;

/// Hands an accepted order to the fulfillment backend.
pub trait OrderFulfillment: Send + Sync {
    fn fulfill(&self, order: &Order) -> anyhow::Result<Fulfillment>;
}

/// Tax entries applicable to a jurisdiction.
pub trait TaxRateLookup: Send + Sync {
    fn tax_entries(&self, postal_code: &str, country: &str) -> anyhow::Result<Vec<TaxEntry>>;
}

/// Confirmation delivery. Placement does not depend on the outcome.
pub trait OrderNotifier: Send + Sync {
    fn send_order_confirmation_email(
        &self,
        customer_id: Option<CustomerId>,
        order_id: OrderId,
    ) -> anyhow::Result<()>;
}

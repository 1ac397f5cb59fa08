//! Sales Orders domain module.
//!
//! Order validation and pricing: an `Order` is checked for unique SKUs and
//! stock, handed to fulfillment, priced against the customer's tax entries and
//! confirmed by notification. All external systems are reached through the
//! capability traits in [`ports`].

pub mod in_memory;
pub mod order;
pub mod ports;
pub mod service;
pub mod summary;
pub mod tax;
pub mod validation;

pub use in_memory::{InMemoryTaxRates, RecordingNotifier, SequentialFulfillment};
pub use order::{Order, OrderItem};
pub use ports::{CustomerDirectory, InventoryLookup, OrderFulfillment, OrderNotifier, TaxRateLookup};
pub use service::{OrderService, PlaceOrderError};
pub use summary::{Fulfillment, OrderSummary};
pub use tax::TaxEntry;
pub use validation::{RejectionReason, validate_order};

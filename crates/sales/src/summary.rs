use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use orderentry_core::{OrderId, ValueObject};

use crate::tax::TaxEntry;

/// What fulfillment hands back for an accepted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fulfillment {
    pub order_number: String,
    pub order_id: OrderId,
}

impl Fulfillment {
    pub fn new(order_number: impl Into<String>, order_id: OrderId) -> Self {
        Self {
            order_number: order_number.into(),
            order_id,
        }
    }
}

impl ValueObject for Fulfillment {}

/// Result of a successful placement. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub order_number: String,
    pub order_id: OrderId,
    pub taxes: Vec<TaxEntry>,
    pub net_total: Decimal,
    pub total: Decimal,
}

impl ValueObject for OrderSummary {}

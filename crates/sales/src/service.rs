//! Order placement workflow.
//!
//! ```text
//! Order
//!   ↓
//! 1. Validate (unique SKUs, stock) → InvalidOrder on failure
//!   ↓
//! 2. Fulfill → order number + id
//!   ↓
//! 3. Fetch customer → tax jurisdiction
//!   ↓
//! 4. Price: net total, then tax entries applied to it one by one
//!   ↓
//! 5. Request confirmation email (outcome ignored)
//!   ↓
//! OrderSummary
//! ```
//!
//! Every collaborator call is synchronous. Collaborator errors stop the
//! workflow and reach the caller as they were raised.

use std::sync::Arc;

use thiserror::Error;

use orderentry_core::DomainError;

use crate::order::Order;
use crate::ports::{CustomerDirectory, OrderFulfillment, OrderNotifier, TaxRateLookup};
use crate::summary::OrderSummary;
use crate::tax;
use crate::validation;

#[derive(Debug, Error)]
pub enum PlaceOrderError {
    /// The order was rejected before anything external was called, or its
    /// totals did not fit the decimal range.
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// A collaborator failed; the error is the collaborator's own.
    #[error(transparent)]
    Collaborator(#[from] anyhow::Error),
}

impl PlaceOrderError {
    /// Rejection reasons, when the order itself was invalid.
    pub fn reasons(&self) -> Option<&[String]> {
        match self {
            PlaceOrderError::Domain(err) => err.reasons(),
            PlaceOrderError::Collaborator(_) => None,
        }
    }
}

/// Places validated orders against injected collaborators.
///
/// Holds no state of its own between calls.
#[derive(Clone)]
pub struct OrderService {
    fulfillment: Arc<dyn OrderFulfillment>,
    customers: Arc<dyn CustomerDirectory>,
    tax_rates: Arc<dyn TaxRateLookup>,
    notifier: Arc<dyn OrderNotifier>,
}

impl OrderService {
    pub fn new(
        fulfillment: Arc<dyn OrderFulfillment>,
        customers: Arc<dyn CustomerDirectory>,
        tax_rates: Arc<dyn TaxRateLookup>,
        notifier: Arc<dyn OrderNotifier>,
    ) -> Self {
        Self {
            fulfillment,
            customers,
            tax_rates,
            notifier,
        }
    }

    /// Check an order without placing it.
    pub fn validate_order<'a>(&self, order: Option<&'a Order>) -> Result<&'a Order, DomainError> {
        validation::validate_order(order)
    }

    pub fn place(&self, order: &Order) -> Result<OrderSummary, PlaceOrderError> {
        self.place_order(Some(order))
    }

    pub fn place_order(&self, order: Option<&Order>) -> Result<OrderSummary, PlaceOrderError> {
        let order = self.validate_order(order).inspect_err(|err| {
            tracing::debug!(error = %err, "order rejected");
        })?;

        let fulfillment = self.fulfillment.fulfill(order)?;
        let customer = self.customers.get(order.customer_id())?;

        let net_total = order.net_total()?;
        let taxes = self
            .tax_rates
            .tax_entries(&customer.postal_code, &customer.country)?;
        let total = tax::total_for(net_total, &taxes)?;

        if let Err(err) = self
            .notifier
            .send_order_confirmation_email(order.customer_id(), fulfillment.order_id)
        {
            tracing::warn!(
                order_id = %fulfillment.order_id,
                error = %err,
                "order confirmation email failed"
            );
        }

        tracing::debug!(
            order_number = %fulfillment.order_number,
            order_id = %fulfillment.order_id,
            %net_total,
            %total,
            "order placed"
        );

        Ok(OrderSummary {
            order_number: fulfillment.order_number,
            order_id: fulfillment.order_id,
            taxes,
            net_total,
            total,
        })
    }
}

impl core::fmt::Debug for OrderService {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OrderService").finish_non_exhaustive()
    }
}

//! In-memory collaborators.
//!
//! Intended for tests/dev. Not optimized for performance. Poisoned locks are
//! recovered; the tables hold plain values only.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Mutex, PoisonError, RwLock};

use orderentry_core::{CustomerId, DomainError, OrderId};

use crate::order::Order;
use crate::ports::{OrderFulfillment, OrderNotifier, TaxRateLookup};
use crate::summary::Fulfillment;
use crate::tax::TaxEntry;

/// Fulfillment that numbers orders sequentially, starting at 1.
#[derive(Debug)]
pub struct SequentialFulfillment {
    prefix: String,
    next_id: AtomicI64,
}

impl SequentialFulfillment {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for SequentialFulfillment {
    fn default() -> Self {
        Self::new("ORD")
    }
}

impl OrderFulfillment for SequentialFulfillment {
    fn fulfill(&self, _order: &Order) -> anyhow::Result<Fulfillment> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        Ok(Fulfillment::new(
            format!("{}-{id:06}", self.prefix),
            OrderId::new(id),
        ))
    }
}

/// Tax table keyed by `(postal_code, country)`.
///
/// Unknown jurisdictions fail with [`DomainError::NotFound`].
#[derive(Debug, Default)]
pub struct InMemoryTaxRates {
    entries: RwLock<HashMap<(String, String), Vec<TaxEntry>>>,
}

impl InMemoryTaxRates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &self,
        postal_code: impl Into<String>,
        country: impl Into<String>,
        taxes: Vec<TaxEntry>,
    ) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((postal_code.into(), country.into()), taxes);
    }
}

impl TaxRateLookup for InMemoryTaxRates {
    fn tax_entries(&self, postal_code: &str, country: &str) -> anyhow::Result<Vec<TaxEntry>> {
        let entries = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner);

        entries
            .get(&(postal_code.to_string(), country.to_string()))
            .cloned()
            .ok_or_else(|| {
                DomainError::not_found(format!("tax entries for {postal_code}/{country}")).into()
            })
    }
}

/// Notifier that records every confirmation request.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<(Option<CustomerId>, OrderId)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Confirmations requested so far, oldest first.
    pub fn sent(&self) -> Vec<(Option<CustomerId>, OrderId)> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl OrderNotifier for RecordingNotifier {
    fn send_order_confirmation_email(
        &self,
        customer_id: Option<CustomerId>,
        order_id: OrderId,
    ) -> anyhow::Result<()> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((customer_id, order_id));
        Ok(())
    }
}

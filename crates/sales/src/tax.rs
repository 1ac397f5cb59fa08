use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use orderentry_core::{DomainError, DomainResult, ValueObject};

/// One tax applying to an order, as returned by the tax-rate service.
///
/// `rate` is a fraction (`0.06` is 6%).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxEntry {
    pub description: String,
    pub rate: Decimal,
}

impl TaxEntry {
    pub fn new(description: impl Into<String>, rate: Decimal) -> Self {
        Self {
            description: description.into(),
            rate,
        }
    }

    /// This entry's share of `net_total`.
    pub fn amount_on(&self, net_total: Decimal) -> DomainResult<Decimal> {
        net_total
            .checked_mul(self.rate)
            .ok_or_else(|| DomainError::overflow(format!("{} tax", self.description)))
    }
}

impl ValueObject for TaxEntry {}

/// Order total: each entry is applied to the net total on its own and the
/// results are added. Rates are never compounded.
pub fn total_for(net_total: Decimal, taxes: &[TaxEntry]) -> DomainResult<Decimal> {
    taxes.iter().try_fold(Decimal::ZERO, |acc, entry| {
        acc.checked_add(entry.amount_on(net_total)?)
            .ok_or_else(|| DomainError::overflow("order total"))
    })
}

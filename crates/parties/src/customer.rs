use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use orderentry_core::{CustomerId, DomainError, Entity};

/// Customer record as seen by order placement.
///
/// Only the fields needed to resolve tax jurisdiction are carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: CustomerId,
    pub postal_code: String,
    pub country: String,
}

impl Customer {
    pub fn new(
        customer_id: CustomerId,
        postal_code: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            customer_id,
            postal_code: postal_code.into(),
            country: country.into(),
        }
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.customer_id
    }
}

/// Customer directory capability.
///
/// The id is optional because orders may be built without one; how a missing
/// id is answered is up to the directory.
pub trait CustomerDirectory: Send + Sync {
    fn get(&self, customer_id: Option<CustomerId>) -> anyhow::Result<Customer>;
}

/// In-memory customer directory.
///
/// Intended for tests/dev. Missing or unknown ids fail with
/// [`DomainError::NotFound`]. A poisoned lock is recovered.
#[derive(Debug, Default)]
pub struct InMemoryCustomerDirectory {
    customers: RwLock<HashMap<CustomerId, Customer>>,
}

impl InMemoryCustomerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, customer: Customer) {
        self.customers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(customer.customer_id, customer);
    }
}

impl CustomerDirectory for InMemoryCustomerDirectory {
    fn get(&self, customer_id: Option<CustomerId>) -> anyhow::Result<Customer> {
        let customer_id =
            customer_id.ok_or_else(|| DomainError::not_found("customer id not set"))?;

        let customers = self
            .customers
            .read()
            .unwrap_or_else(PoisonError::into_inner);

        customers
            .get(&customer_id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("customer {customer_id}")).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory_with(id: i64) -> InMemoryCustomerDirectory {
        let directory = InMemoryCustomerDirectory::new();
        directory.insert(Customer::new(CustomerId::new(id), "97201", "US"));
        directory
    }

    #[test]
    fn returns_known_customer() {
        let directory = directory_with(3);
        let customer = directory.get(Some(CustomerId::new(3))).unwrap();
        assert_eq!(customer.postal_code, "97201");
        assert_eq!(customer.country, "US");
        assert_eq!(customer.id(), &CustomerId::new(3));
    }

    #[test]
    fn unknown_customer_is_not_found() {
        let directory = directory_with(3);
        let err = directory.get(Some(CustomerId::new(4))).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DomainError>(),
            Some(&DomainError::not_found("customer 4"))
        );
    }

    #[test]
    fn missing_id_is_not_found() {
        let directory = directory_with(3);
        let err = directory.get(None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DomainError>(),
            Some(DomainError::NotFound(_))
        ));
    }

    #[test]
    fn customer_round_trips_through_json() {
        let customer = Customer::new(CustomerId::new(1), "10115", "DE");
        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(json["customer_id"], 1);
        assert_eq!(json["country"], "DE");
    }

    #[test]
    fn insert_survives_a_poisoned_lock() {
        let directory = std::sync::Arc::new(directory_with(3));
        let poisoner = directory.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.customers.write().unwrap();
            panic!("poison the directory");
        })
        .join();
        assert!(directory.customers.is_poisoned());

        directory.insert(Customer::new(CustomerId::new(4), "10115", "DE"));
        assert_eq!(directory.get(Some(CustomerId::new(4))).unwrap().country, "DE");
        assert_eq!(directory.get(Some(CustomerId::new(3))).unwrap().country, "US");
    }
}

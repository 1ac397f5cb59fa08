//! Parties domain module (customers).
//!
//! Customers are owned by an external directory; this crate holds the record
//! shape the order pipeline reads and the capability used to fetch it.

pub mod customer;

pub use customer::{Customer, CustomerDirectory, InMemoryCustomerDirectory};

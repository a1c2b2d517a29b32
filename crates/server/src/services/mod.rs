//! Business logic services.
//!
//! - [`customers`] - customer find-or-create and address reconciliation
//! - [`orders`] - catalog validation, order assembly, and queries

pub mod customers;
pub mod orders;

pub use customers::CustomerService;
pub use orders::{NewOrder, OrderService};

//! Domain types for customers and orders.
//!
//! These are the records the repositories persist, separate from the
//! request/response DTOs in the route layer.

pub mod customer;
pub mod order;

pub use customer::{Customer, CustomerProfile};
pub use order::{Order, OrderItem};

//! Storage for customer and order records.
//!
//! Each entity gets a small repository trait exposing exact-match lookups
//! plus insert/update, so handlers and services never touch the storage
//! engine directly. The default engine is an in-memory document store
//! ([`memory`]); a database-backed engine would implement the same traits.
//!
//! The customer find-or-create performed by the service layer is an
//! unsynchronized read-then-write: two concurrent first orders for the same
//! email both observe "absent" and both insert. The store's keying by email
//! arbitrates that race (last write wins); the application does not lock
//! per-email.

pub mod memory;

pub use memory::{InMemoryCustomers, InMemoryOrders};

use async_trait::async_trait;

use greengrocer_core::{Email, OrderId};

use crate::models::{Customer, Order};

/// Errors surfaced by the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The storage engine could not service the operation.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Data in the store is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Storage for customer records, keyed by email.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Find a customer by exact email match.
    async fn find_by_email(&self, email: &Email) -> Result<Option<Customer>, RepositoryError>;

    /// Insert a new customer record.
    async fn insert(&self, customer: Customer) -> Result<Customer, RepositoryError>;

    /// Persist changes to an existing customer record.
    async fn update(&self, customer: Customer) -> Result<Customer, RepositoryError>;
}

/// Storage for order records.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert a new order record.
    async fn insert(&self, order: Order) -> Result<Order, RepositoryError>;

    /// Find an order by id.
    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, RepositoryError>;

    /// List all orders in creation order.
    async fn list(&self) -> Result<Vec<Order>, RepositoryError>;
}

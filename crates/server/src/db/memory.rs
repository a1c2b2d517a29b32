//! In-memory document store.
//!
//! Records are kept in process memory behind `RwLock`s: customers in a map
//! keyed by email, orders in an append-only vec so listing preserves
//! creation order. Each repository call takes the lock once, so individual
//! operations are atomic; cross-operation sequences (find then insert) are
//! not, as documented on the module root.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use greengrocer_core::{Email, OrderId};

use super::{CustomerRepository, OrderRepository, RepositoryError};
use crate::models::{Customer, Order};

fn poisoned(which: &str) -> RepositoryError {
    RepositoryError::Unavailable(format!("{which} store lock poisoned"))
}

/// In-memory customer store, keyed by email.
#[derive(Debug, Default)]
pub struct InMemoryCustomers {
    records: RwLock<HashMap<Email, Customer>>,
}

impl InMemoryCustomers {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of customer records, for tests and diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Unavailable`] if the lock is poisoned.
    pub fn len(&self) -> Result<usize, RepositoryError> {
        Ok(self.records.read().map_err(|_| poisoned("customer"))?.len())
    }

    /// Whether the store holds no records.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Unavailable`] if the lock is poisoned.
    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.len()? == 0)
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomers {
    async fn find_by_email(&self, email: &Email) -> Result<Option<Customer>, RepositoryError> {
        let records = self.records.read().map_err(|_| poisoned("customer"))?;
        Ok(records.get(email).cloned())
    }

    async fn insert(&self, customer: Customer) -> Result<Customer, RepositoryError> {
        let mut records = self.records.write().map_err(|_| poisoned("customer"))?;
        records.insert(customer.email.clone(), customer.clone());
        Ok(customer)
    }

    async fn update(&self, customer: Customer) -> Result<Customer, RepositoryError> {
        let mut records = self.records.write().map_err(|_| poisoned("customer"))?;
        records.insert(customer.email.clone(), customer.clone());
        Ok(customer)
    }
}

/// In-memory order store, append-only.
#[derive(Debug, Default)]
pub struct InMemoryOrders {
    records: RwLock<Vec<Order>>,
}

impl InMemoryOrders {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of order records, for tests and diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Unavailable`] if the lock is poisoned.
    pub fn len(&self) -> Result<usize, RepositoryError> {
        Ok(self.records.read().map_err(|_| poisoned("order"))?.len())
    }

    /// Whether the store holds no records.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Unavailable`] if the lock is poisoned.
    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.len()? == 0)
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrders {
    async fn insert(&self, order: Order) -> Result<Order, RepositoryError> {
        let mut records = self.records.write().map_err(|_| poisoned("order"))?;
        records.push(order.clone());
        Ok(order)
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        let records = self.records.read().map_err(|_| poisoned("order"))?;
        Ok(records.iter().find(|o| o.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Order>, RepositoryError> {
        let records = self.records.read().map_err(|_| poisoned("order"))?;
        Ok(records.clone())
    }
}

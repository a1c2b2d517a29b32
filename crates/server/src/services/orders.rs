//! Order assembly and queries.

use std::sync::Arc;

use greengrocer_core::{Address, OrderId};

use crate::catalog::Catalog;
use crate::db::OrderRepository;
use crate::error::AppError;
use crate::models::{CustomerProfile, Order, OrderItem};
use crate::services::CustomerService;

/// A validated-ready order creation request.
#[derive(Debug, Clone)]
pub struct NewOrder {
    /// Name of the store to order from.
    pub store: String,
    /// Delivery address for this order.
    pub address: Address,
    /// Requested line items.
    pub items: Vec<OrderItem>,
    /// Customer profile block from the request.
    pub customer: CustomerProfile,
}

/// Creates and reads orders.
#[derive(Clone)]
pub struct OrderService {
    catalog: Arc<Catalog>,
    customers: CustomerService,
    orders: Arc<dyn OrderRepository>,
}

impl OrderService {
    /// Create a new order service.
    pub fn new(catalog: Arc<Catalog>, customers: CustomerService, orders: Arc<dyn OrderRepository>) -> Self {
        Self {
            catalog,
            customers,
            orders,
        }
    }

    /// Run the creation workflow: catalog validation, customer
    /// reconciliation, then order persistence.
    ///
    /// The customer record is created or updated before the order is
    /// written; there is no transaction spanning the two writes, so a
    /// failing order insert leaves the customer mutation in place.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] when the store is unknown or any item has
    ///   no catalog match under the configured policy; nothing is persisted
    ///   in either case.
    /// - [`AppError::Repository`] when a storage operation fails.
    pub async fn create(&self, new_order: NewOrder) -> Result<Order, AppError> {
        let store = self
            .catalog
            .store(&new_order.store)
            .ok_or_else(|| AppError::Validation(format!("store not found: {}", new_order.store)))?;

        let unmatched = store.unmatched_items(&new_order.items, self.catalog.policy());
        if !unmatched.is_empty() {
            let names = unmatched
                .iter()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(AppError::Validation(format!(
                "products not found in store {}: {names}",
                store.name
            )));
        }

        let customer = self
            .customers
            .reconcile(new_order.customer, new_order.address.clone())
            .await?;

        let order = Order::new(
            new_order.store,
            customer.email,
            new_order.address,
            new_order.items,
        );
        Ok(self.orders.insert(order).await?)
    }

    /// List all orders in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Repository`] when the storage read fails.
    pub async fn list(&self) -> Result<Vec<Order>, AppError> {
        Ok(self.orders.list().await?)
    }

    /// Fetch a single order by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no order has the id, and
    /// [`AppError::Repository`] when the storage read fails.
    pub async fn get(&self, id: OrderId) -> Result<Order, AppError> {
        self.orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("order {id}")))
    }
}

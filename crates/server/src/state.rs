//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::ServerConfig;
use crate::db::{CustomerRepository, InMemoryCustomers, InMemoryOrders, OrderRepository};
use crate::services::{CustomerService, OrderService};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; carries the configuration and the order
/// service wired over the catalog and repositories.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    orders: OrderService,
}

impl AppState {
    /// Create application state over explicit repositories.
    #[must_use]
    pub fn new(
        config: ServerConfig,
        catalog: Catalog,
        customers: Arc<dyn CustomerRepository>,
        orders: Arc<dyn OrderRepository>,
    ) -> Self {
        let orders = OrderService::new(
            Arc::new(catalog),
            CustomerService::new(customers),
            orders,
        );
        Self {
            inner: Arc::new(AppStateInner { config, orders }),
        }
    }

    /// Create application state backed by empty in-memory stores.
    #[must_use]
    pub fn in_memory(config: ServerConfig, catalog: Catalog) -> Self {
        Self::new(
            config,
            catalog,
            Arc::new(InMemoryCustomers::new()),
            Arc::new(InMemoryOrders::new()),
        )
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the order service.
    #[must_use]
    pub fn orders(&self) -> &OrderService {
        &self.inner.orders
    }
}

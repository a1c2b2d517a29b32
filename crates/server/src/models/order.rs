//! Order domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use greengrocer_core::{Address, Email, OrderId, OrderStatus};

/// A single line item on an order.
///
/// Carries the product fields plus the ordered quantity; the quantity is
/// stripped when the item is checked against the store catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Product name.
    pub name: String,
    /// Unit the product is sold in (e.g. "loaf", "liter").
    pub unit: String,
    /// Unit price at the time of ordering.
    pub price: Decimal,
    /// Ordered quantity.
    pub amount: u32,
}

/// A persisted order record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order id.
    pub id: OrderId,
    /// Name of the store the order was placed against.
    pub store: String,
    /// Email of the customer this order belongs to.
    pub customer_email: Email,
    /// Delivery address used for this order.
    pub address: Address,
    /// Line items; immutable after creation.
    pub items: Vec<OrderItem>,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// When the order was created.
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Assemble a new order linked to a customer email.
    #[must_use]
    pub fn new(store: String, customer_email: Email, address: Address, items: Vec<OrderItem>) -> Self {
        Self {
            id: OrderId::new(),
            store,
            customer_email,
            address,
            items,
            status: OrderStatus::Created,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_order_starts_created() {
        let order = Order::new(
            "Downtown".to_owned(),
            Email::parse("a@x.com").unwrap(),
            Address::parse("12 Elm St").unwrap(),
            vec![],
        );
        assert_eq!(order.status, OrderStatus::Created);
        assert_eq!(order.customer_email.as_str(), "a@x.com");
    }

    #[test]
    fn test_item_serializes_camel_case() {
        let item = OrderItem {
            name: "Bread".to_owned(),
            unit: "loaf".to_owned(),
            price: Decimal::new(25, 1),
            amount: 2,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["name"], "Bread");
        assert_eq!(json["amount"], 2);
    }
}

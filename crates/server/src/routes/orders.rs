//! Order API routes.
//!
//! JSON endpoints for listing, fetching, and creating orders. Failure
//! responses are uniform across error kinds (see [`crate::error`]); the
//! per-operation user-facing messages live here with the handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use chrono::{DateTime, Utc};
use greengrocer_core::{Address, Email, OrderId, OrderStatus};

use crate::error::AppError;
use crate::models::{CustomerProfile, Order, OrderItem};
use crate::services::NewOrder;
use crate::state::AppState;

/// Request body for POST /api/order/create.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    /// Store to order from.
    pub store: String,
    /// Delivery address.
    pub address: Address,
    /// Requested line items.
    pub items: Vec<OrderItem>,
    /// Customer profile block.
    pub customer: CustomerProfile,
}

impl From<CreateOrderRequest> for NewOrder {
    fn from(req: CreateOrderRequest) -> Self {
        Self {
            store: req.store,
            address: req.address,
            items: req.items,
            customer: req.customer,
        }
    }
}

/// External shape of an order record.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: OrderId,
    pub store: String,
    pub customer_email: Email,
    pub address: Address,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            store: order.store,
            customer_email: order.customer_email,
            address: order.address,
            items: order.items,
            status: order.status,
            created_at: order.created_at,
        }
    }
}

/// GET /api/orders
pub async fn list(State(state): State<AppState>) -> Response {
    match state.orders().list().await {
        Ok(orders) => {
            let mapped: Vec<OrderResponse> = orders.into_iter().map(OrderResponse::from).collect();
            (StatusCode::OK, Json(mapped)).into_response()
        }
        Err(err) => err.log_and_respond("orders:list", "Can't get orders"),
    }
}

/// GET /api/order/{id}
pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    // A malformed id behaves like an unknown one: the API does not
    // distinguish "not found" from other failures.
    let result = match id.parse::<OrderId>() {
        Ok(order_id) => state.orders().get(order_id).await,
        Err(_) => Err(AppError::NotFound(format!("order {id}"))),
    };

    match result {
        Ok(order) => (StatusCode::OK, Json(OrderResponse::from(order))).into_response(),
        Err(err) => err.log_and_respond("orders:get", "Can't get order"),
    }
}

/// POST /api/order/create
pub async fn create(State(state): State<AppState>, Json(req): Json<CreateOrderRequest>) -> Response {
    match state.orders().create(req.into()).await {
        Ok(order) => (
            StatusCode::CREATED,
            Json(json!({
                "message": "Order created successfully",
                "status": StatusCode::CREATED.as_u16(),
                "order": OrderResponse::from(order),
            })),
        )
            .into_response(),
        Err(err) => err.log_and_respond("orders:create", "Order can't be created"),
    }
}

//! Persisted order records.

use chrono::{DateTime, Utc};
use common::{Money, OrderId, ProductId, UserId};
use serde::{Deserialize, Serialize};

use crate::DeliveryDetails;

/// Lifecycle status of a stored order.
///
/// Orders are written as pending; later transitions belong to the kitchen
/// and delivery systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Accepted and waiting to be prepared.
    #[default]
    Pending,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
        }
    }
}

/// Input for the order write.
#[derive(Debug, Clone)]
pub struct NewOrder {
    /// The shopper placing the order.
    pub user_id: UserId,

    /// Total price of the cart at submission time.
    pub total_amount: Money,

    /// Delivery address, phone and notes.
    pub delivery: DeliveryDetails,
}

/// A stored order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: OrderId,
    pub user_id: UserId,
    pub total_amount: Money,
    pub status: OrderStatus,
    pub delivery_address: String,
    pub phone: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A stored order line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineRecord {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub total_price: Money,
}

/// An order together with its lines, as shown in order history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub order: OrderRecord,
    pub lines: Vec<OrderLineRecord>,
}

/// Returned to the caller once both writes succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderConfirmation {
    /// The identifier of the new order.
    pub order_id: OrderId,

    /// Amount charged for the order.
    pub total_amount: Money,

    /// Number of units across all lines.
    pub total_items: u64,
}

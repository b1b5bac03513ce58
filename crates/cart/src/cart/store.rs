//! Cart store capability and snapshots.

use std::sync::Arc;

use common::{LineItemId, Money, Product};
use serde::Serialize;

use super::{CartEvent, LineItem};

/// Read-only copy of a cart at a point in time.
///
/// Order submission works from a snapshot so that in-flight work never
/// touches the live cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CartSnapshot {
    /// Line items in insertion order.
    pub items: Vec<LineItem>,

    /// Sum of all quantities.
    pub total_items: u64,

    /// Sum of all subtotals.
    pub total_price: Money,
}

impl CartSnapshot {
    /// Returns true if the snapshot has no line items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The operations any cart backend offers.
///
/// Every operation is total: unknown identifiers are no-ops and
/// non-positive quantities passed to `update_quantity` remove the item.
/// Each call returns the events it applied, empty when nothing changed.
pub trait CartStore {
    /// Adds `quantity` units of `product`, merging into an existing line for the same product.
    fn add(&mut self, product: Arc<Product>, quantity: u32) -> Vec<CartEvent>;

    /// Sets the quantity of a line item, removing it when `quantity <= 0`.
    fn update_quantity(&mut self, item_id: &LineItemId, quantity: i64) -> Vec<CartEvent>;

    /// Removes a line item if present.
    fn remove(&mut self, item_id: &LineItemId) -> Vec<CartEvent>;

    /// Discards every line item.
    fn clear(&mut self) -> Vec<CartEvent>;

    /// Returns a read-only copy of the current state.
    fn snapshot(&self) -> CartSnapshot;
}

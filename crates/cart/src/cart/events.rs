//! Cart domain events.

use std::sync::Arc;

use common::{LineItemId, Product};
use serde::{Deserialize, Serialize};

use crate::aggregate::DomainEvent;

/// Events that can occur on a cart aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum CartEvent {
    /// A new line item was created for a product.
    ItemAdded(ItemAddedData),

    /// The quantity of an existing line item changed.
    ItemQuantityChanged(ItemQuantityChangedData),

    /// A line item was removed from the cart.
    ItemRemoved(ItemRemovedData),

    /// Every line item was discarded.
    CartCleared(CartClearedData),
}

impl DomainEvent for CartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CartEvent::ItemAdded(_) => "ItemAdded",
            CartEvent::ItemQuantityChanged(_) => "ItemQuantityChanged",
            CartEvent::ItemRemoved(_) => "ItemRemoved",
            CartEvent::CartCleared(_) => "CartCleared",
        }
    }
}

/// Data for ItemAdded event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemAddedData {
    /// Identifier assigned to the new line item.
    pub item_id: LineItemId,

    /// The product the line item refers to.
    pub product: Arc<Product>,

    /// Initial quantity.
    pub quantity: u32,
}

/// Data for ItemQuantityChanged event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemQuantityChangedData {
    /// The line item whose quantity changed.
    pub item_id: LineItemId,

    /// Previous quantity.
    pub old_quantity: u32,

    /// New quantity.
    pub new_quantity: u32,
}

/// Data for ItemRemoved event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRemovedData {
    /// The line item that was removed.
    pub item_id: LineItemId,
}

/// Data for CartCleared event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartClearedData {
    /// Number of line items discarded.
    pub items_removed: usize,
}

// Convenience constructors for events
impl CartEvent {
    /// Creates an ItemAdded event.
    pub fn item_added(item_id: LineItemId, product: Arc<Product>, quantity: u32) -> Self {
        CartEvent::ItemAdded(ItemAddedData {
            item_id,
            product,
            quantity,
        })
    }

    /// Creates an ItemQuantityChanged event.
    pub fn item_quantity_changed(
        item_id: LineItemId,
        old_quantity: u32,
        new_quantity: u32,
    ) -> Self {
        CartEvent::ItemQuantityChanged(ItemQuantityChangedData {
            item_id,
            old_quantity,
            new_quantity,
        })
    }

    /// Creates an ItemRemoved event.
    pub fn item_removed(item_id: LineItemId) -> Self {
        CartEvent::ItemRemoved(ItemRemovedData { item_id })
    }

    /// Creates a CartCleared event.
    pub fn cart_cleared(items_removed: usize) -> Self {
        CartEvent::CartCleared(CartClearedData { items_removed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::Money;

    fn burger() -> Arc<Product> {
        Arc::new(Product::new(
            "1",
            "Super Burgão",
            Money::from_cents(1550),
            "hamburgueres",
        ))
    }

    #[test]
    fn test_event_type() {
        let event = CartEvent::item_added(LineItemId::new("1-1"), burger(), 1);
        assert_eq!(event.event_type(), "ItemAdded");

        let event = CartEvent::item_quantity_changed(LineItemId::new("1-1"), 1, 3);
        assert_eq!(event.event_type(), "ItemQuantityChanged");

        let event = CartEvent::item_removed(LineItemId::new("1-1"));
        assert_eq!(event.event_type(), "ItemRemoved");

        let event = CartEvent::cart_cleared(2);
        assert_eq!(event.event_type(), "CartCleared");
    }

    #[test]
    fn test_item_added_serialization() {
        let event = CartEvent::item_added(LineItemId::new("1-1"), burger(), 2);

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"ItemAdded\""));

        let deserialized: CartEvent = serde_json::from_str(&json).unwrap();
        if let CartEvent::ItemAdded(data) = deserialized {
            assert_eq!(data.item_id.as_str(), "1-1");
            assert_eq!(data.product.name, "Super Burgão");
            assert_eq!(data.product.price.cents(), 1550);
            assert_eq!(data.quantity, 2);
        } else {
            panic!("Expected ItemAdded event");
        }
    }
}

//! Line item value object.

use std::sync::Arc;

use common::{LineItemId, Money, Product};
use serde::Serialize;

/// One entry in the cart, binding a product to a quantity.
///
/// The subtotal is recomputed whenever the quantity changes, so it always
/// equals `product.price * quantity`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    /// Identifier unique within the owning cart.
    pub id: LineItemId,

    /// The product this line refers to.
    pub product: Arc<Product>,

    quantity: u32,

    subtotal: Money,
}

impl LineItem {
    pub(crate) fn new(id: LineItemId, product: Arc<Product>, quantity: u32) -> Self {
        let subtotal = product.price.multiply(quantity);
        Self {
            id,
            product,
            quantity,
            subtotal,
        }
    }

    /// Returns the quantity (always at least 1 while the item is in a cart).
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the unit price of the product.
    pub fn unit_price(&self) -> Money {
        self.product.price
    }

    /// Returns `unit_price * quantity`.
    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.subtotal = self.product.price.multiply(quantity);
    }
}

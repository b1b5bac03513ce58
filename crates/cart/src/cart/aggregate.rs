//! Cart aggregate implementation.

use std::sync::Arc;

use common::{LineItemId, Money, Product, ProductId};

use crate::aggregate::Aggregate;

use super::{
    CartEvent, CartSnapshot, CartStore, IdGenerator, LineItem, TimestampIdGenerator,
    events::{ItemAddedData, ItemQuantityChangedData},
};

/// Cart aggregate root.
///
/// Holds the line items of one shopping session in insertion order together
/// with two derived totals. The totals are recomputed from the items after
/// every applied event and are never adjusted independently.
#[derive(Debug, Clone)]
pub struct Cart<G = TimestampIdGenerator> {
    /// Line items in insertion order.
    items: Vec<LineItem>,

    /// Sum of all quantities.
    total_items: u64,

    /// Sum of all subtotals.
    total_price: Money,

    /// Source of identifiers for new line items.
    id_generator: G,
}

impl Cart<TimestampIdGenerator> {
    /// Creates an empty cart with wall-clock derived item identifiers.
    pub fn new() -> Self {
        Self::with_id_generator(TimestampIdGenerator)
    }
}

impl Default for Cart<TimestampIdGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> Aggregate for Cart<G> {
    type Event = CartEvent;

    fn aggregate_type() -> &'static str {
        "Cart"
    }

    fn apply(&mut self, event: Self::Event) {
        match event {
            CartEvent::ItemAdded(data) => self.apply_item_added(data),
            CartEvent::ItemQuantityChanged(data) => self.apply_item_quantity_changed(data),
            CartEvent::ItemRemoved(data) => self.apply_item_removed(&data.item_id),
            CartEvent::CartCleared(_) => self.items.clear(),
        }
        self.recalculate_totals();
    }
}

// Query methods
impl<G: IdGenerator> Cart<G> {
    /// Creates an empty cart using the given identifier generator.
    pub fn with_id_generator(id_generator: G) -> Self {
        Self {
            items: Vec::new(),
            total_items: 0,
            total_price: Money::zero(),
            id_generator,
        }
    }

    /// Returns the line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns a line item by its identifier.
    pub fn get_item(&self, item_id: &LineItemId) -> Option<&LineItem> {
        self.items.iter().find(|item| &item.id == item_id)
    }

    /// Returns the line item holding the given product, if any.
    pub fn find_by_product(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| &item.product.id == product_id)
    }

    /// Returns the number of line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the cart has no line items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the sum of all quantities.
    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    /// Returns the sum of all subtotals.
    pub fn total_price(&self) -> Money {
        self.total_price
    }

    /// Returns a read-only copy of the current state.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.items.clone(),
            total_items: self.total_items,
            total_price: self.total_price,
        }
    }
}

// Operations (decide, then apply)
impl<G: IdGenerator> Cart<G> {
    /// Adds `quantity` units of a product.
    ///
    /// If a line item already holds the same product its quantity is increased;
    /// otherwise a new line item with a fresh identifier is appended. Adding
    /// zero units changes nothing.
    ///
    /// When merging, the existing line keeps the product it was created with,
    /// so its unit price stays the one shown when the line was first added.
    /// A repriced product only affects new lines.
    pub fn add(&mut self, product: Arc<Product>, quantity: u32) -> Vec<CartEvent> {
        let events = self.decide_add(product, quantity);
        self.commit(events)
    }

    /// Sets the quantity of a line item.
    ///
    /// A quantity of zero or less removes the item. Unknown identifiers are ignored.
    pub fn update_quantity(&mut self, item_id: &LineItemId, quantity: i64) -> Vec<CartEvent> {
        let events = self.decide_update_quantity(item_id, quantity);
        self.commit(events)
    }

    /// Removes a line item. Unknown identifiers are ignored.
    pub fn remove(&mut self, item_id: &LineItemId) -> Vec<CartEvent> {
        let events = self.decide_remove(item_id);
        self.commit(events)
    }

    /// Discards every line item and resets both totals to zero.
    ///
    /// Clearing an empty cart emits no event.
    pub fn clear(&mut self) -> Vec<CartEvent> {
        if self.items.is_empty() {
            return vec![];
        }
        let events = vec![CartEvent::cart_cleared(self.items.len())];
        self.commit(events)
    }

    fn decide_add(&self, product: Arc<Product>, quantity: u32) -> Vec<CartEvent> {
        if quantity == 0 {
            tracing::warn!(product_id = %product.id, "ignoring add with zero quantity");
            return vec![];
        }

        match self.find_by_product(&product.id) {
            Some(existing) => vec![CartEvent::item_quantity_changed(
                existing.id.clone(),
                existing.quantity(),
                existing.quantity().saturating_add(quantity),
            )],
            None => {
                let item_id = self.fresh_item_id(&product.id);
                vec![CartEvent::item_added(item_id, product, quantity)]
            }
        }
    }

    fn decide_update_quantity(&self, item_id: &LineItemId, quantity: i64) -> Vec<CartEvent> {
        if quantity <= 0 {
            return self.decide_remove(item_id);
        }

        let Some(existing) = self.get_item(item_id) else {
            return vec![];
        };

        let new_quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if new_quantity == existing.quantity() {
            return vec![];
        }

        vec![CartEvent::item_quantity_changed(
            item_id.clone(),
            existing.quantity(),
            new_quantity,
        )]
    }

    fn decide_remove(&self, item_id: &LineItemId) -> Vec<CartEvent> {
        if self.get_item(item_id).is_some() {
            vec![CartEvent::item_removed(item_id.clone())]
        } else {
            vec![]
        }
    }

    /// Asks the generator for an identifier, suffixing it on the rare
    /// occasion it collides with a line item already in the cart.
    fn fresh_item_id(&self, product_id: &ProductId) -> LineItemId {
        let base = self.id_generator.next_id(product_id);
        if self.get_item(&base).is_none() {
            return base;
        }

        let mut suffix = 2u64;
        loop {
            let candidate = LineItemId::new(format!("{base}-{suffix}"));
            if self.get_item(&candidate).is_none() {
                return candidate;
            }
            suffix += 1;
        }
    }

    fn commit(&mut self, events: Vec<CartEvent>) -> Vec<CartEvent> {
        self.apply_events(events.iter().cloned());
        if !events.is_empty() {
            tracing::debug!(
                events = events.len(),
                line_items = self.items.len(),
                total_items = self.total_items,
                total_price = %self.total_price,
                "cart updated"
            );
        }
        events
    }
}

// Apply event helpers
impl<G> Cart<G> {
    fn apply_item_added(&mut self, data: ItemAddedData) {
        if data.quantity == 0 {
            return;
        }
        self.items
            .push(LineItem::new(data.item_id, data.product, data.quantity));
    }

    fn apply_item_quantity_changed(&mut self, data: ItemQuantityChangedData) {
        if data.new_quantity == 0 {
            self.apply_item_removed(&data.item_id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|item| item.id == data.item_id) {
            item.set_quantity(data.new_quantity);
        }
    }

    fn apply_item_removed(&mut self, item_id: &LineItemId) {
        self.items.retain(|item| &item.id != item_id);
    }

    fn recalculate_totals(&mut self) {
        self.total_items = self.items.iter().map(|item| u64::from(item.quantity())).sum();
        self.total_price = self.items.iter().map(LineItem::subtotal).sum();
    }
}

impl<G: IdGenerator> CartStore for Cart<G> {
    fn add(&mut self, product: Arc<Product>, quantity: u32) -> Vec<CartEvent> {
        Cart::add(self, product, quantity)
    }

    fn update_quantity(&mut self, item_id: &LineItemId, quantity: i64) -> Vec<CartEvent> {
        Cart::update_quantity(self, item_id, quantity)
    }

    fn remove(&mut self, item_id: &LineItemId) -> Vec<CartEvent> {
        Cart::remove(self, item_id)
    }

    fn clear(&mut self) -> Vec<CartEvent> {
        Cart::clear(self)
    }

    fn snapshot(&self) -> CartSnapshot {
        Cart::snapshot(self)
    }
}

//! Shopping cart core for the food storefront.
//!
//! This crate provides:
//! - Aggregate trait for event-applying entities
//! - The `Cart` aggregate with its line items and derived totals
//! - `CartStore`, the capability collaborators use to drive a cart
//! - Injectable line item identifier generation

pub mod aggregate;
pub mod cart;

pub use aggregate::{Aggregate, DomainEvent};
pub use cart::{
    Cart, CartClearedData, CartEvent, CartSnapshot, CartStore, IdGenerator, ItemAddedData,
    ItemQuantityChangedData, ItemRemovedData, LineItem, SequentialIdGenerator,
    TimestampIdGenerator,
};

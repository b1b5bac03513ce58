//! Cart aggregate and related types.

mod aggregate;
mod events;
mod ids;
mod line_item;
mod store;

pub use aggregate::Cart;
pub use events::{
    CartClearedData, CartEvent, ItemAddedData, ItemQuantityChangedData, ItemRemovedData,
};
pub use ids::{IdGenerator, SequentialIdGenerator, TimestampIdGenerator};
pub use line_item::LineItem;
pub use store::{CartSnapshot, CartStore};

//! Shared value types for the food storefront.
//!
//! Identifiers, money and the product record are used by every other crate
//! in the workspace, so they live here to avoid dependency cycles.

pub mod money;
pub mod product;
pub mod types;

pub use money::{Money, MoneyParseError};
pub use product::Product;
pub use types::{CategoryId, LineItemId, OrderId, ProductId, UserId};

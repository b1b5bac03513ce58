//! Order submission for the food storefront.
//!
//! Checkout turns a cart snapshot plus delivery details into two related
//! writes: the order record and its lines. The cart itself is only cleared
//! once both writes are confirmed; on any failure it is left untouched so the
//! shopper can retry.
//!
//! If the line write fails after the order row was created, the order row is
//! deleted again as a compensating step.

pub mod delivery;
pub mod error;
pub mod records;
pub mod repository;
pub mod service;

pub use delivery::DeliveryDetails;
pub use error::CheckoutError;
pub use records::{
    NewOrder, OrderConfirmation, OrderLineRecord, OrderRecord, OrderStatus, OrderSummary,
};
pub use repository::{InMemoryOrderRepository, OrderRepository};
pub use service::CheckoutService;

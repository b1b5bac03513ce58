//! Checkout error types.

use thiserror::Error;

/// Errors that can occur while submitting an order.
///
/// Every variant leaves the shopper's cart untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// No authenticated user is attached to the request.
    #[error("User is not authenticated")]
    Unauthenticated,

    /// The cart snapshot has no line items.
    #[error("Cart is empty")]
    EmptyCart,

    /// A required delivery field is blank.
    #[error("Incomplete delivery details: {0} is required")]
    IncompleteDelivery(&'static str),

    /// The order store rejected a write or could not be reached.
    #[error("Order persistence failed: {0}")]
    Persistence(String),
}

impl CheckoutError {
    /// Returns true if retrying the same submission may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, CheckoutError::Persistence(_))
    }

    /// Short label used for metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            CheckoutError::Unauthenticated => "unauthenticated",
            CheckoutError::EmptyCart => "empty_cart",
            CheckoutError::IncompleteDelivery(_) => "incomplete_delivery",
            CheckoutError::Persistence(_) => "persistence",
        }
    }
}

/// Convenience type alias for checkout results.
pub type Result<T> = std::result::Result<T, CheckoutError>;

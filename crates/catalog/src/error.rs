//! Catalog error types.

use common::ProductId;
use thiserror::Error;

/// Errors that can occur while reading the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The backing store could not be reached.
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),

    /// No product exists with the given ID.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),
}

/// Convenience type alias for catalog results.
pub type Result<T> = std::result::Result<T, CatalogError>;

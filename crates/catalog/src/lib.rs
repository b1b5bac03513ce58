//! Product catalog for the food storefront.
//!
//! The catalog supplies the `Product` records carts are built from. It is a
//! trait so the storefront can be backed by a hosted table or, as here, by
//! the in-memory menu in [`fixtures`].

pub mod category;
pub mod error;
pub mod fixtures;
pub mod images;
pub mod provider;

pub use category::{Category, POPULAR_CATEGORY};
pub use error::CatalogError;
pub use images::resolve_image;
pub use provider::{InMemoryCatalog, ProductCatalog};

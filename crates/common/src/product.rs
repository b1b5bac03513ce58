//! Product record supplied by the catalog.

use serde::{Deserialize, Serialize};

use crate::{CategoryId, Money, ProductId};

/// A sellable menu item.
///
/// Products are owned by the catalog and shared read-only with carts, so the
/// price captured in a line item is always the catalog's unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// The product identifier.
    pub id: ProductId,

    /// Human-readable product name.
    pub name: String,

    /// Short description shown under the name.
    #[serde(default)]
    pub description: String,

    /// Price per unit. Trusted to be non-negative.
    pub price: Money,

    /// Image reference (path or URL).
    #[serde(default)]
    pub image: String,

    /// Category this product is listed under.
    pub category: CategoryId,

    /// Whether the product appears in the "most ordered" section.
    #[serde(default)]
    pub popular: bool,
}

impl Product {
    /// Creates a product with an empty description and image.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        category: impl Into<CategoryId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            image: String::new(),
            category: category.into(),
            popular: false,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Flags the product as popular.
    pub fn popular(mut self) -> Self {
        self.popular = true;
        self
    }
}

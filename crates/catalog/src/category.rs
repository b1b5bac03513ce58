//! Menu categories.

use common::{CategoryId, Product};
use serde::{Deserialize, Serialize};

/// The pseudo-category listing popular products across every real category.
pub const POPULAR_CATEGORY: &str = "populares";

/// A section of the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category identifier.
    pub id: CategoryId,

    /// Display name.
    pub name: String,

    /// Emoji shown next to the name.
    pub icon: String,
}

impl Category {
    /// Creates a new category.
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
        }
    }

    /// Returns true if this is the popular pseudo-category.
    pub fn is_popular(&self) -> bool {
        is_popular_category(&self.id)
    }
}

/// Returns true if `id` names the popular pseudo-category.
pub fn is_popular_category(id: &CategoryId) -> bool {
    id.as_str() == POPULAR_CATEGORY
}

/// Returns true if `product` is listed under `category`.
///
/// The popular pseudo-category matches on the product's flag rather than its category.
pub fn lists(category: &CategoryId, product: &Product) -> bool {
    if is_popular_category(category) {
        product.popular
    } else {
        &product.category == category
    }
}

//! Catalog provider trait and in-memory implementation.

use std::sync::Arc;

use async_trait::async_trait;
use common::{CategoryId, Product, ProductId};
use tokio::sync::RwLock;

use crate::category::{self, Category};
use crate::error::{CatalogError, Result};
use crate::{fixtures, images};

/// Read access to the menu.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Returns every category in display order.
    async fn categories(&self) -> Result<Vec<Category>>;

    /// Returns every product, popular ones first.
    async fn products(&self) -> Result<Vec<Arc<Product>>>;

    /// Returns a single product.
    async fn product(&self, id: &ProductId) -> Result<Arc<Product>>;

    /// Returns the products listed under a category.
    ///
    /// The popular pseudo-category lists every product flagged popular.
    async fn products_by_category(&self, category: &CategoryId) -> Result<Vec<Arc<Product>>> {
        let products = self.products().await?;
        Ok(products
            .into_iter()
            .filter(|product| category::lists(category, product))
            .collect())
    }
}

#[derive(Debug, Default)]
struct InMemoryCatalogState {
    categories: Vec<Category>,
    products: Vec<Arc<Product>>,
    unavailable: bool,
}

/// In-memory catalog, seeded with the built-in menu by default.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    state: Arc<RwLock<InMemoryCatalogState>>,
}

impl InMemoryCatalog {
    /// Creates a catalog holding the built-in menu.
    pub fn new() -> Self {
        Self::with_menu(fixtures::categories(), fixtures::products())
    }

    /// Creates a catalog holding the given menu.
    ///
    /// Products without an image get a stock one, and popular products are
    /// moved to the front while otherwise keeping their order.
    pub fn with_menu(categories: Vec<Category>, products: Vec<Product>) -> Self {
        let mut products: Vec<Arc<Product>> =
            products.into_iter().map(with_resolved_image).map(Arc::new).collect();
        products.sort_by_key(|product| !product.popular);

        Self {
            state: Arc::new(RwLock::new(InMemoryCatalogState {
                categories,
                products,
                unavailable: false,
            })),
        }
    }

    /// Inserts a product, replacing any product with the same ID.
    pub async fn upsert_product(&self, product: Product) {
        let product = Arc::new(with_resolved_image(product));
        let mut state = self.state.write().await;

        match state.products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product,
            None => state.products.push(product),
        }
        state.products.sort_by_key(|product| !product.popular);
    }

    /// Makes every subsequent read fail with [`CatalogError::Unavailable`].
    pub async fn set_unavailable(&self, unavailable: bool) {
        self.state.write().await.unavailable = unavailable;
    }

    /// Returns the number of products.
    pub async fn product_count(&self) -> usize {
        self.state.read().await.products.len()
    }
}

fn with_resolved_image(mut product: Product) -> Product {
    if product.image.is_empty() {
        product.image = images::resolve_image(&product.name, product.category.as_str()).to_string();
    }
    product
}

#[async_trait]
impl ProductCatalog for InMemoryCatalog {
    async fn categories(&self) -> Result<Vec<Category>> {
        let state = self.state.read().await;
        if state.unavailable {
            return Err(CatalogError::Unavailable("catalog offline".to_string()));
        }
        Ok(state.categories.clone())
    }

    async fn products(&self) -> Result<Vec<Arc<Product>>> {
        let state = self.state.read().await;
        if state.unavailable {
            tracing::warn!("product listing requested while catalog is offline");
            return Err(CatalogError::Unavailable("catalog offline".to_string()));
        }
        Ok(state.products.clone())
    }

    async fn product(&self, id: &ProductId) -> Result<Arc<Product>> {
        let state = self.state.read().await;
        if state.unavailable {
            return Err(CatalogError::Unavailable("catalog offline".to_string()));
        }
        state
            .products
            .iter()
            .find(|product| &product.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::ProductNotFound(id.clone()))
    }
}

//! Store settings and catalog endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use catalog::{Category, ProductCatalog};
use common::{CategoryId, Product};
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::{AppState, StoreInfo};

#[derive(Debug, Deserialize)]
pub struct ProductFilter {
    pub category: Option<String>,
}

/// GET /store — storefront name and opening status.
pub async fn store(State(state): State<Arc<AppState>>) -> Json<StoreInfo> {
    Json(state.store.clone())
}

/// GET /categories — menu sections in display order.
pub async fn categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Category>>, ApiError> {
    Ok(Json(state.catalog.categories().await?))
}

/// GET /products — the menu, optionally narrowed to one category.
#[tracing::instrument(skip(state))]
pub async fn products(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<ProductFilter>,
) -> Result<Json<Vec<Arc<Product>>>, ApiError> {
    let products = match filter.category.filter(|c| !c.is_empty()) {
        Some(category) => {
            state
                .catalog
                .products_by_category(&CategoryId::new(category))
                .await?
        }
        None => state.catalog.products().await?,
    };
    Ok(Json(products))
}

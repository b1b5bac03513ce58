//! Shared application state.

use catalog::InMemoryCatalog;
use checkout::{CheckoutService, InMemoryOrderRepository};
use serde::Serialize;

use crate::config::Config;
use crate::session::CartSessions;

/// Storefront settings shown in the header.
#[derive(Debug, Clone, Serialize)]
pub struct StoreInfo {
    pub name: String,
    pub open: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_time: Option<String>,
}

impl From<&Config> for StoreInfo {
    fn from(config: &Config) -> Self {
        Self {
            name: config.store_name.clone(),
            open: config.store_open,
            open_time: config.store_open_time.clone(),
        }
    }
}

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub catalog: InMemoryCatalog,
    pub checkout: CheckoutService<InMemoryOrderRepository>,
    pub sessions: CartSessions,
    pub store: StoreInfo,
}

//! HTTP storefront with observability.
//!
//! Serves the menu, keeps one cart per session, submits carts as orders and
//! lists order history, with structured logging (tracing) and Prometheus
//! metrics.

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
pub mod session;
pub mod state;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::{delete, get, patch, post};
use catalog::InMemoryCatalog;
use checkout::{CheckoutService, InMemoryOrderRepository};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use session::CartSessions;
use state::{AppState, StoreInfo};

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::system::metrics))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::system::health))
        .route("/store", get(routes::menu::store))
        .route("/categories", get(routes::menu::categories))
        .route("/products", get(routes::menu::products))
        .route("/cart", get(routes::carts::get).delete(routes::carts::clear))
        .route("/cart/items", post(routes::carts::add_item))
        .route(
            "/cart/items/{id}",
            patch(routes::carts::update_item).delete(routes::carts::remove_item),
        )
        .route("/checkout", post(routes::orders::submit))
        .route("/orders", get(routes::orders::history))
        .route("/session", delete(routes::carts::end_session))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the default application state: the built-in menu, an in-memory
/// order repository and no sessions.
pub fn create_default_state(config: &Config) -> Arc<AppState> {
    Arc::new(AppState {
        catalog: InMemoryCatalog::new(),
        checkout: CheckoutService::new(InMemoryOrderRepository::new()),
        sessions: CartSessions::new(config.session_ttl),
        store: StoreInfo::from(config),
    })
}

/// Spawns a task that ends idle cart sessions every `every`.
pub fn spawn_session_sweeper(state: Arc<AppState>, every: Duration) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            state.sessions.evict_idle().await;
        }
    })
}

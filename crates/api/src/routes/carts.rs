//! Per-session cart endpoints.
//!
//! Stale or unknown line item IDs are not errors: the cart treats them as
//! no-ops and the handlers return the unchanged cart.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use cart::{CartEvent, CartSnapshot};
use catalog::ProductCatalog;
use common::{LineItemId, ProductId};
use serde::Deserialize;

use crate::error::ApiError;
use crate::extract::SessionId;
use crate::state::AppState;

// -- Request types --

#[derive(Deserialize)]
pub struct AddItemRequest {
    pub product_id: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

#[derive(Deserialize)]
pub struct UpdateQuantityRequest {
    pub quantity: i64,
}

// -- Handlers --

/// GET /cart — the session's current cart.
pub async fn get(
    State(state): State<Arc<AppState>>,
    SessionId(session): SessionId,
) -> Json<CartSnapshot> {
    Json(state.sessions.snapshot(&session).await)
}

/// POST /cart/items — add a catalog product to the cart.
#[tracing::instrument(skip(state, req))]
pub async fn add_item(
    State(state): State<Arc<AppState>>,
    SessionId(session): SessionId,
    Json(req): Json<AddItemRequest>,
) -> Result<Json<CartSnapshot>, ApiError> {
    let product = state
        .catalog
        .product(&ProductId::new(req.product_id))
        .await?;

    let (events, snapshot) = state
        .sessions
        .mutate(&session, |cart| cart.add(product, req.quantity))
        .await;
    record("add", &events);

    Ok(Json(snapshot))
}

/// PATCH /cart/items/{id} — set a line item's quantity; zero or less removes it.
#[tracing::instrument(skip(state, req))]
pub async fn update_item(
    State(state): State<Arc<AppState>>,
    SessionId(session): SessionId,
    Path(item_id): Path<String>,
    Json(req): Json<UpdateQuantityRequest>,
) -> Json<CartSnapshot> {
    let item_id = LineItemId::new(item_id);
    let snapshot = state
        .sessions
        .mutate_existing(&session, |cart| {
            let events = cart.update_quantity(&item_id, req.quantity);
            record("update_quantity", &events);
            cart.snapshot()
        })
        .await
        .unwrap_or_default();

    Json(snapshot)
}

/// DELETE /cart/items/{id} — remove a line item.
#[tracing::instrument(skip(state))]
pub async fn remove_item(
    State(state): State<Arc<AppState>>,
    SessionId(session): SessionId,
    Path(item_id): Path<String>,
) -> Json<CartSnapshot> {
    let item_id = LineItemId::new(item_id);
    let snapshot = state
        .sessions
        .mutate_existing(&session, |cart| {
            let events = cart.remove(&item_id);
            record("remove", &events);
            cart.snapshot()
        })
        .await
        .unwrap_or_default();

    Json(snapshot)
}

/// DELETE /cart — empty the cart.
pub async fn clear(
    State(state): State<Arc<AppState>>,
    SessionId(session): SessionId,
) -> Json<CartSnapshot> {
    if let Some(events) = state
        .sessions
        .mutate_existing(&session, |cart| cart.clear())
        .await
    {
        record("clear", &events);
    }
    Json(CartSnapshot::default())
}

/// DELETE /session — end the session and discard its cart.
pub async fn end_session(
    State(state): State<Arc<AppState>>,
    SessionId(session): SessionId,
) -> axum::http::StatusCode {
    state.sessions.end(&session).await;
    axum::http::StatusCode::NO_CONTENT
}

fn record(operation: &'static str, events: &[CartEvent]) {
    let outcome = if events.is_empty() { "noop" } else { "applied" };
    metrics::counter!("cart_operations_total", "operation" => operation, "outcome" => outcome)
        .increment(1);
}

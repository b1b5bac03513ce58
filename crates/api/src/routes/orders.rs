//! Checkout and order history endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use checkout::{CheckoutError, DeliveryDetails, OrderConfirmation, OrderSummary};
use serde::Deserialize;

use crate::error::ApiError;
use crate::extract::{CurrentUser, SessionId};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CheckoutRequest {
    pub address: String,
    pub phone: String,
    pub notes: Option<String>,
}

/// POST /checkout — submit the session's cart as an order.
///
/// Only one checkout per session runs at a time; a second one gets 409. The
/// cart is captured when the checkout starts and the session lock is released
/// while the order is written. On success the ordered lines are taken out of
/// the cart, leaving anything added meanwhile. If the session ended in the
/// meantime the completion is dropped.
#[tracing::instrument(skip(state, req, user))]
pub async fn submit(
    State(state): State<Arc<AppState>>,
    SessionId(session): SessionId,
    CurrentUser(user): CurrentUser,
    Json(req): Json<CheckoutRequest>,
) -> Result<(StatusCode, Json<OrderConfirmation>), ApiError> {
    if user.is_none() {
        return Err(CheckoutError::Unauthenticated.into());
    }
    let delivery = DeliveryDetails::new(&req.address, &req.phone, req.notes.as_deref())?;

    let lease = state.sessions.begin_checkout(&session).await.ok_or_else(|| {
        ApiError::Conflict("A checkout is already in progress for this session".to_string())
    })?;
    let confirmation = state.checkout.submit(user, lease.snapshot(), &delivery).await?;

    if lease.settle().await {
        tracing::debug!(order_id = %confirmation.order_id, "ordered lines removed from cart");
    } else {
        tracing::info!(
            order_id = %confirmation.order_id,
            "session ended during checkout, ignoring completion"
        );
    }

    Ok((StatusCode::CREATED, Json(confirmation)))
}

/// GET /orders — the signed-in user's past orders, newest first.
pub async fn history(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> Json<Vec<OrderSummary>> {
    Json(state.checkout.order_history(user).await)
}

//! Checkout service orchestrating order submission.

use cart::{CartSnapshot, CartStore};
use common::UserId;

use crate::delivery::DeliveryDetails;
use crate::error::{CheckoutError, Result};
use crate::records::{NewOrder, OrderConfirmation, OrderLineRecord, OrderSummary};
use crate::repository::OrderRepository;

/// Submits carts as orders and reads order history.
///
/// The service never mutates a cart while a submission is in flight. It reads
/// a snapshot, performs both writes, and only then clears the cart.
pub struct CheckoutService<R: OrderRepository> {
    repository: R,
}

impl<R: OrderRepository> CheckoutService<R> {
    /// Creates a new checkout service backed by the given repository.
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Returns a reference to the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Persists a cart snapshot as an order.
    ///
    /// Writes the order record first and its lines second. If the line write
    /// fails the order record is deleted again before the error is returned.
    #[tracing::instrument(skip(self, snapshot, delivery), fields(line_items = snapshot.items.len()))]
    pub async fn submit(
        &self,
        user: Option<UserId>,
        snapshot: &CartSnapshot,
        delivery: &DeliveryDetails,
    ) -> Result<OrderConfirmation> {
        metrics::counter!("checkout_submissions_total").increment(1);
        let started = std::time::Instant::now();

        let result = self.persist(user, snapshot, delivery).await;

        metrics::histogram!("checkout_duration_seconds").record(started.elapsed().as_secs_f64());
        match &result {
            Ok(confirmation) => {
                tracing::info!(
                    order_id = %confirmation.order_id,
                    total = %confirmation.total_amount,
                    "order submitted"
                );
            }
            Err(err) => {
                metrics::counter!("checkout_failures_total", "reason" => err.reason()).increment(1);
                tracing::warn!(error = %err, "order submission failed");
            }
        }

        result
    }

    /// Submits the cart and clears it once the order is stored.
    ///
    /// On failure the cart is left exactly as it was.
    pub async fn checkout<C>(
        &self,
        user: Option<UserId>,
        cart: &mut C,
        delivery: &DeliveryDetails,
    ) -> Result<OrderConfirmation>
    where
        C: CartStore + Send,
    {
        let snapshot = cart.snapshot();
        let confirmation = self.submit(user, &snapshot, delivery).await?;
        cart.clear();
        Ok(confirmation)
    }

    /// Returns the user's past orders, newest first.
    ///
    /// Anonymous callers get an empty list. Read failures are logged and also
    /// yield an empty list so history never blocks the storefront.
    #[tracing::instrument(skip(self))]
    pub async fn order_history(&self, user: Option<UserId>) -> Vec<OrderSummary> {
        let Some(user_id) = user else {
            return Vec::new();
        };

        match self.repository.orders_for_user(user_id).await {
            Ok(orders) => orders,
            Err(err) => {
                tracing::error!(error = %err, %user_id, "failed to load order history");
                Vec::new()
            }
        }
    }

    async fn persist(
        &self,
        user: Option<UserId>,
        snapshot: &CartSnapshot,
        delivery: &DeliveryDetails,
    ) -> Result<OrderConfirmation> {
        let user_id = user.ok_or(CheckoutError::Unauthenticated)?;
        if snapshot.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let order = self
            .repository
            .insert_order(NewOrder {
                user_id,
                total_amount: snapshot.total_price,
                delivery: delivery.clone(),
            })
            .await?;

        let lines: Vec<OrderLineRecord> = snapshot
            .items
            .iter()
            .map(|item| OrderLineRecord {
                order_id: order.id,
                product_id: item.product.id.clone(),
                product_name: item.product.name.clone(),
                quantity: item.quantity(),
                unit_price: item.unit_price(),
                total_price: item.subtotal(),
            })
            .collect();

        if let Err(err) = self.repository.insert_lines(lines).await {
            tracing::warn!(order_id = %order.id, "line write failed, deleting order record");
            if let Err(compensation) = self.repository.delete_order(order.id).await {
                tracing::error!(
                    order_id = %order.id,
                    error = %compensation,
                    "failed to delete order after line write failure"
                );
            }
            return Err(err);
        }

        Ok(OrderConfirmation {
            order_id: order.id,
            total_amount: order.total_amount,
            total_items: snapshot.total_items,
        })
    }
}

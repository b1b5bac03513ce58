//! Order repository trait and in-memory implementation.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use common::{OrderId, UserId};
use tokio::sync::{OwnedRwLockWriteGuard, RwLock};

use crate::error::{CheckoutError, Result};
use crate::records::{NewOrder, OrderLineRecord, OrderRecord, OrderStatus, OrderSummary};

/// Storage for submitted orders.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Stores a new order and returns it with its assigned ID and timestamp.
    async fn insert_order(&self, order: NewOrder) -> Result<OrderRecord>;

    /// Stores the lines of an existing order.
    async fn insert_lines(&self, lines: Vec<OrderLineRecord>) -> Result<()>;

    /// Deletes an order and any lines already written for it.
    async fn delete_order(&self, order_id: OrderId) -> Result<()>;

    /// Returns a user's orders with their lines, newest first.
    async fn orders_for_user(&self, user_id: UserId) -> Result<Vec<OrderSummary>>;
}

#[derive(Debug, Default)]
struct InMemoryOrderState {
    orders: Vec<OrderRecord>,
    lines: Vec<OrderLineRecord>,
    fail_on_order: bool,
    fail_on_lines: bool,
    fail_on_read: bool,
}

/// In-memory order repository for tests and local runs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderRepository {
    state: Arc<RwLock<InMemoryOrderState>>,
    write_gate: Arc<RwLock<()>>,
}

impl InMemoryOrderRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the order write to fail.
    pub async fn set_fail_on_order(&self, fail: bool) {
        self.state.write().await.fail_on_order = fail;
    }

    /// Configures the line write to fail.
    pub async fn set_fail_on_lines(&self, fail: bool) {
        self.state.write().await.fail_on_lines = fail;
    }

    /// Configures history reads to fail.
    pub async fn set_fail_on_read(&self, fail: bool) {
        self.state.write().await.fail_on_read = fail;
    }

    /// Holds every order write until the returned guard is dropped.
    pub async fn pause_writes(&self) -> OwnedRwLockWriteGuard<()> {
        Arc::clone(&self.write_gate).write_owned().await
    }

    /// Returns the number of stored orders.
    pub async fn order_count(&self) -> usize {
        self.state.read().await.orders.len()
    }

    /// Returns the number of stored order lines.
    pub async fn line_count(&self) -> usize {
        self.state.read().await.lines.len()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn insert_order(&self, order: NewOrder) -> Result<OrderRecord> {
        let _open = self.write_gate.read().await;
        let mut state = self.state.write().await;

        if state.fail_on_order {
            return Err(CheckoutError::Persistence("order insert rejected".to_string()));
        }

        let record = OrderRecord {
            id: OrderId::new(),
            user_id: order.user_id,
            total_amount: order.total_amount,
            status: OrderStatus::Pending,
            delivery_address: order.delivery.address().to_string(),
            phone: order.delivery.phone().to_string(),
            notes: order.delivery.notes().map(str::to_string),
            created_at: Utc::now(),
        };
        state.orders.push(record.clone());

        Ok(record)
    }

    async fn insert_lines(&self, lines: Vec<OrderLineRecord>) -> Result<()> {
        let mut state = self.state.write().await;

        if state.fail_on_lines {
            return Err(CheckoutError::Persistence(
                "order lines insert rejected".to_string(),
            ));
        }

        if let Some(orphan) = lines
            .iter()
            .find(|line| !state.orders.iter().any(|o| o.id == line.order_id))
        {
            return Err(CheckoutError::Persistence(format!(
                "unknown order {}",
                orphan.order_id
            )));
        }

        state.lines.extend(lines);
        Ok(())
    }

    async fn delete_order(&self, order_id: OrderId) -> Result<()> {
        let mut state = self.state.write().await;
        state.orders.retain(|order| order.id != order_id);
        state.lines.retain(|line| line.order_id != order_id);
        Ok(())
    }

    async fn orders_for_user(&self, user_id: UserId) -> Result<Vec<OrderSummary>> {
        let state = self.state.read().await;

        if state.fail_on_read {
            return Err(CheckoutError::Persistence("order history unavailable".to_string()));
        }

        let mut summaries: Vec<OrderSummary> = state
            .orders
            .iter()
            .rev()
            .filter(|order| order.user_id == user_id)
            .map(|order| OrderSummary {
                order: order.clone(),
                lines: state
                    .lines
                    .iter()
                    .filter(|line| line.order_id == order.id)
                    .cloned()
                    .collect(),
            })
            .collect();
        summaries.sort_by(|a, b| b.order.created_at.cmp(&a.order.created_at));

        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DeliveryDetails;
    use common::{Money, ProductId};

    fn new_order(user_id: UserId) -> NewOrder {
        NewOrder {
            user_id,
            total_amount: Money::from_cents(3100),
            delivery: DeliveryDetails::new("Rua A, 1", "1234", None).unwrap(),
        }
    }

    fn line(order_id: OrderId) -> OrderLineRecord {
        OrderLineRecord {
            order_id,
            product_id: ProductId::new("1"),
            product_name: "Super Burgão".to_string(),
            quantity: 2,
            unit_price: Money::from_cents(1550),
            total_price: Money::from_cents(3100),
        }
    }

    #[tokio::test]
    async fn test_insert_and_read_back() {
        let repo = InMemoryOrderRepository::new();
        let user = UserId::new();

        let order = repo.insert_order(new_order(user)).await.unwrap();
        repo.insert_lines(vec![line(order.id)]).await.unwrap();

        let history = repo.orders_for_user(user).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].order.status, OrderStatus::Pending);
        assert_eq!(history[0].lines.len(), 1);
        assert!(repo.orders_for_user(UserId::new()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_newest_first() {
        let repo = InMemoryOrderRepository::new();
        let user = UserId::new();

        let first = repo.insert_order(new_order(user)).await.unwrap();
        let second = repo.insert_order(new_order(user)).await.unwrap();

        let history = repo.orders_for_user(user).await.unwrap();
        assert_eq!(history[0].order.id, second.id);
        assert_eq!(history[1].order.id, first.id);
    }

    #[tokio::test]
    async fn test_lines_for_unknown_order_rejected() {
        let repo = InMemoryOrderRepository::new();
        let result = repo.insert_lines(vec![line(OrderId::new())]).await;
        assert!(matches!(result, Err(CheckoutError::Persistence(_))));
        assert_eq!(repo.line_count().await, 0);
    }

    #[tokio::test]
    async fn test_failure_toggles() {
        let repo = InMemoryOrderRepository::new();
        let user = UserId::new();

        repo.set_fail_on_order(true).await;
        assert!(repo.insert_order(new_order(user)).await.is_err());
        assert_eq!(repo.order_count().await, 0);
        repo.set_fail_on_order(false).await;

        let order = repo.insert_order(new_order(user)).await.unwrap();
        repo.set_fail_on_lines(true).await;
        assert!(repo.insert_lines(vec![line(order.id)]).await.is_err());

        repo.set_fail_on_read(true).await;
        assert!(repo.orders_for_user(user).await.is_err());
    }

    #[tokio::test]
    async fn test_paused_writes_resume_on_release() {
        let repo = InMemoryOrderRepository::new();
        let pause = repo.pause_writes().await;

        let writer = tokio::spawn({
            let repo = repo.clone();
            async move { repo.insert_order(new_order(UserId::new())).await }
        });
        tokio::task::yield_now().await;
        assert_eq!(repo.order_count().await, 0);

        drop(pause);
        writer.await.unwrap().unwrap();
        assert_eq!(repo.order_count().await, 1);
    }

    #[tokio::test]
    async fn test_delete_order_removes_lines() {
        let repo = InMemoryOrderRepository::new();
        let order = repo.insert_order(new_order(UserId::new())).await.unwrap();
        repo.insert_lines(vec![line(order.id)]).await.unwrap();

        repo.delete_order(order.id).await.unwrap();

        assert_eq!(repo.order_count().await, 0);
        assert_eq!(repo.line_count().await, 0);
    }
}

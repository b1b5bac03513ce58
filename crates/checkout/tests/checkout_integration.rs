//! Integration tests for checkout against the in-memory order repository.

use std::sync::Arc;

use cart::{Cart, SequentialIdGenerator};
use checkout::{CheckoutError, CheckoutService, DeliveryDetails, InMemoryOrderRepository, OrderStatus};
use common::{Money, Product, UserId};

struct TestHarness {
    service: CheckoutService<InMemoryOrderRepository>,
    repository: InMemoryOrderRepository,
    user: UserId,
}

impl TestHarness {
    fn new() -> Self {
        let repository = InMemoryOrderRepository::new();
        Self {
            service: CheckoutService::new(repository.clone()),
            repository,
            user: UserId::new(),
        }
    }

    fn cart_with(&self, lines: &[(&str, i64, u32)]) -> Cart<SequentialIdGenerator> {
        let mut cart = Cart::with_id_generator(SequentialIdGenerator::new());
        for (id, cents, quantity) in lines {
            let product = Product::new(*id, format!("Item {id}"), Money::from_cents(*cents), "hamburgueres");
            cart.add(Arc::new(product), *quantity);
        }
        cart
    }
}

fn delivery() -> DeliveryDetails {
    DeliveryDetails::new("Av. Paulista, 1000", "(11) 98888-7777", None).unwrap()
}

#[tokio::test]
async fn successful_checkout_persists_snapshot_and_clears_cart() {
    let harness = TestHarness::new();
    let mut cart = harness.cart_with(&[("A", 1000, 4), ("B", 550, 2)]);

    let confirmation = harness
        .service
        .checkout(Some(harness.user), &mut cart, &delivery())
        .await
        .unwrap();

    assert_eq!(confirmation.total_amount, Money::from_cents(5100));
    assert_eq!(confirmation.total_items, 6);
    assert!(cart.is_empty());

    let history = harness.service.order_history(Some(harness.user)).await;
    assert_eq!(history.len(), 1);
    let summary = &history[0];
    assert_eq!(summary.order.status, OrderStatus::Pending);
    assert_eq!(summary.order.total_amount, Money::from_cents(5100));
    assert_eq!(summary.order.delivery_address, "Av. Paulista, 1000");
    assert_eq!(summary.order.notes, None);

    let line_total: Money = summary.lines.iter().map(|l| l.total_price).sum();
    assert_eq!(line_total, summary.order.total_amount);
    for line in &summary.lines {
        assert_eq!(line.total_price, line.unit_price.multiply(line.quantity));
    }
}

#[tokio::test]
async fn failed_checkout_keeps_cart_and_allows_retry() {
    let harness = TestHarness::new();
    let mut cart = harness.cart_with(&[("A", 1000, 1)]);
    harness.repository.set_fail_on_lines(true).await;

    let err = harness
        .service
        .checkout(Some(harness.user), &mut cart, &delivery())
        .await
        .unwrap_err();

    assert!(err.is_retryable());
    assert_eq!(cart.len(), 1);
    assert_eq!(harness.repository.order_count().await, 0);

    harness.repository.set_fail_on_lines(false).await;
    harness
        .service
        .checkout(Some(harness.user), &mut cart, &delivery())
        .await
        .unwrap();

    assert!(cart.is_empty());
    assert_eq!(harness.repository.order_count().await, 1);
}

#[tokio::test]
async fn anonymous_checkout_is_rejected_without_writes() {
    let harness = TestHarness::new();
    let mut cart = harness.cart_with(&[("A", 1000, 1)]);

    let err = harness
        .service
        .checkout(None, &mut cart, &delivery())
        .await
        .unwrap_err();

    assert_eq!(err, CheckoutError::Unauthenticated);
    assert!(!cart.is_empty());
    assert_eq!(harness.repository.order_count().await, 0);
}

#[tokio::test]
async fn submission_reads_snapshot_not_live_cart() {
    let harness = TestHarness::new();
    let mut cart = harness.cart_with(&[("A", 1000, 1)]);
    let snapshot = cart.snapshot();

    let first = cart.items()[0].id.clone();
    cart.update_quantity(&first, 10);

    let confirmation = harness
        .service
        .submit(Some(harness.user), &snapshot, &delivery())
        .await
        .unwrap();

    assert_eq!(confirmation.total_amount, Money::from_cents(1000));
    assert_eq!(cart.total_items(), 10);
}

#[tokio::test]
async fn history_is_scoped_per_user_and_newest_first() {
    let harness = TestHarness::new();
    let other = UserId::new();

    let mut first = harness.cart_with(&[("A", 1000, 1)]);
    let mut second = harness.cart_with(&[("B", 550, 2)]);
    let mut foreign = harness.cart_with(&[("C", 300, 1)]);

    let c1 = harness.service.checkout(Some(harness.user), &mut first, &delivery()).await.unwrap();
    let c2 = harness.service.checkout(Some(harness.user), &mut second, &delivery()).await.unwrap();
    harness.service.checkout(Some(other), &mut foreign, &delivery()).await.unwrap();

    let history = harness.service.order_history(Some(harness.user)).await;
    let ids: Vec<_> = history.iter().map(|s| s.order.id).collect();
    assert_eq!(ids, vec![c2.order_id, c1.order_id]);
}

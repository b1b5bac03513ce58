//! Integration tests for the cart aggregate.
//!
//! These tests drive the public API through realistic shopping sessions and
//! check that the derived totals never drift from the line items.

use std::sync::Arc;

use cart::{Cart, CartStore, LineItem, SequentialIdGenerator};
use common::{LineItemId, Money, Product};

fn product(id: &str, price: &str) -> Arc<Product> {
    Arc::new(Product::new(
        id,
        format!("Product {id}"),
        Money::parse(price).unwrap(),
        "hamburgueres",
    ))
}

fn new_cart() -> Cart<SequentialIdGenerator> {
    Cart::with_id_generator(SequentialIdGenerator::new())
}

fn assert_totals_consistent(cart: &Cart<SequentialIdGenerator>) {
    let quantity: u64 = cart.items().iter().map(|i| u64::from(i.quantity())).sum();
    let price: Money = cart.items().iter().map(LineItem::subtotal).sum();
    assert_eq!(cart.total_items(), quantity);
    assert_eq!(cart.total_price(), price);
    for item in cart.items() {
        assert!(item.quantity() >= 1, "line item with non-positive quantity");
        assert_eq!(item.subtotal(), item.unit_price().multiply(item.quantity()));
    }
}

mod scenarios {
    use super::*;

    #[test]
    fn repeated_add_merges_into_one_line() {
        let mut cart = new_cart();
        let a = product("A", "10.00");

        cart.add(a.clone(), 1);
        cart.add(a, 2);

        assert_eq!(cart.len(), 1);
        let item = &cart.items()[0];
        assert_eq!(item.quantity(), 3);
        assert_eq!(item.subtotal(), Money::parse("30.00").unwrap());
        assert_eq!(cart.total_price(), Money::parse("30.00").unwrap());
        assert_totals_consistent(&cart);
    }

    #[test]
    fn update_quantity_recomputes_totals() {
        let mut cart = new_cart();
        cart.add(product("A", "10.00"), 1);
        cart.add(product("B", "5.50"), 2);
        let item_a = cart.items()[0].id.clone();

        cart.update_quantity(&item_a, 4);

        assert_eq!(cart.total_items(), 6);
        assert_eq!(cart.total_price(), Money::parse("51.00").unwrap());
        assert_totals_consistent(&cart);
    }

    #[test]
    fn remove_leaves_only_other_item() {
        let mut cart = new_cart();
        cart.add(product("A", "10.00"), 1);
        cart.add(product("B", "5.50"), 2);
        let item_a = cart.items()[0].id.clone();
        let item_b = cart.items()[1].id.clone();

        cart.remove(&item_a);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].id, item_b);
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_price(), Money::parse("11.00").unwrap());
        assert_totals_consistent(&cart);
    }

    #[test]
    fn clear_always_resets() {
        let mut cart = new_cart();
        cart.clear();
        assert!(cart.is_empty());

        cart.add(product("A", "10.00"), 3);
        cart.add(product("B", "5.50"), 1);
        cart.clear();

        let snapshot = cart.snapshot();
        assert!(snapshot.items.is_empty());
        assert_eq!(snapshot.total_items, 0);
        assert!(snapshot.total_price.is_zero());
    }

    #[test]
    fn insertion_order_is_stable() {
        let mut cart = new_cart();
        for id in ["C", "A", "B"] {
            cart.add(product(id, "1.00"), 1);
        }
        let first = cart.items()[0].id.clone();
        cart.update_quantity(&first, 5);

        let order: Vec<&str> = cart.items().iter().map(|i| i.product.id.as_str()).collect();
        assert_eq!(order, vec!["C", "A", "B"]);
    }

    #[test]
    fn snapshot_is_detached_from_live_cart() {
        let mut cart = new_cart();
        cart.add(product("A", "10.00"), 1);
        let snapshot = cart.snapshot();

        cart.clear();

        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.total_items, 1);
        assert!(cart.is_empty());
    }

    #[test]
    fn snapshot_serializes_totals() {
        let mut cart = new_cart();
        cart.add(product("A", "10.00"), 2);

        let json = serde_json::to_value(cart.snapshot()).unwrap();

        assert_eq!(json["total_items"], 2);
        assert_eq!(json["total_price"]["cents"], 2000);
        assert_eq!(json["items"][0]["quantity"], 2);
        assert_eq!(json["items"][0]["subtotal"]["cents"], 2000);
        assert_eq!(json["items"][0]["product"]["id"], "A");
    }

    #[test]
    fn stale_identifiers_are_ignored_through_trait() {
        fn run(store: &mut impl CartStore) {
            let ghost = LineItemId::new("ghost");
            store.remove(&ghost);
            store.update_quantity(&ghost, 10);
            store.update_quantity(&ghost, -1);
        }

        let mut cart = new_cart();
        cart.add(product("A", "10.00"), 1);
        let before = cart.snapshot();

        run(&mut cart);

        assert_eq!(cart.snapshot(), before);
    }
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Add { product: usize, quantity: u32 },
        Update { slot: usize, quantity: i64 },
        Remove { slot: usize },
        Clear,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => (0usize..5, 0u32..10).prop_map(|(product, quantity)| Op::Add { product, quantity }),
            3 => (0usize..8, -3i64..12).prop_map(|(slot, quantity)| Op::Update { slot, quantity }),
            2 => (0usize..8).prop_map(|slot| Op::Remove { slot }),
            1 => Just(Op::Clear),
        ]
    }

    fn catalog() -> Vec<Arc<Product>> {
        ["0.99", "5.50", "10.00", "13.90", "0.00"]
            .iter()
            .enumerate()
            .map(|(i, price)| product(&format!("P{i}"), price))
            .collect()
    }

    /// Picks an existing item for small slots and a stale identifier otherwise.
    fn target(cart: &Cart<SequentialIdGenerator>, slot: usize) -> LineItemId {
        cart.items()
            .get(slot)
            .map(|item| item.id.clone())
            .unwrap_or_else(|| LineItemId::new(format!("stale-{slot}")))
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 500,
            ..ProptestConfig::default()
        })]

        /// Property: totals equal the sums over line items after every operation.
        #[test]
        fn totals_never_drift(ops in proptest::collection::vec(op_strategy(), 0..40)) {
            let products = catalog();
            let mut cart = new_cart();

            for op in ops {
                match op {
                    Op::Add { product, quantity } => {
                        cart.add(products[product].clone(), quantity);
                    }
                    Op::Update { slot, quantity } => {
                        let id = target(&cart, slot);
                        cart.update_quantity(&id, quantity);
                        if quantity <= 0 {
                            prop_assert!(cart.get_item(&id).is_none());
                        }
                    }
                    Op::Remove { slot } => {
                        let id = target(&cart, slot);
                        cart.remove(&id);
                        prop_assert!(cart.get_item(&id).is_none());
                    }
                    Op::Clear => {
                        cart.clear();
                        prop_assert!(cart.is_empty());
                    }
                }

                assert_totals_consistent(&cart);
            }
        }

        /// Property: a product never occupies more than one line item.
        #[test]
        fn one_line_per_product(adds in proptest::collection::vec((0usize..5, 1u32..5), 1..30)) {
            let products = catalog();
            let mut cart = new_cart();
            let mut expected = [0u64; 5];

            for (product, quantity) in adds {
                cart.add(products[product].clone(), quantity);
                expected[product] += u64::from(quantity);
            }

            let distinct = expected.iter().filter(|q| **q > 0).count();
            prop_assert_eq!(cart.len(), distinct);
            for (i, quantity) in expected.iter().enumerate() {
                let line = cart.find_by_product(&products[i].id);
                prop_assert_eq!(line.map(|l| u64::from(l.quantity())).unwrap_or(0), *quantity);
            }
        }
    }
}

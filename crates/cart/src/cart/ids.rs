//! Line item identifier generation.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use common::{LineItemId, ProductId};

/// Produces identifiers for newly created line items.
///
/// Identifiers only need to be unique within one cart; the cart guards
/// against collisions itself, so generators may repeat across carts.
pub trait IdGenerator: Send + Sync {
    /// Returns an identifier for a new line item of the given product.
    fn next_id(&self, product_id: &ProductId) -> LineItemId;
}

impl<F> IdGenerator for F
where
    F: Fn(&ProductId) -> LineItemId + Send + Sync,
{
    fn next_id(&self, product_id: &ProductId) -> LineItemId {
        self(product_id)
    }
}

/// Derives identifiers from the product id and the wall clock,
/// e.g. `"3-1718000000000"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampIdGenerator;

impl IdGenerator for TimestampIdGenerator {
    fn next_id(&self, product_id: &ProductId) -> LineItemId {
        LineItemId::new(format!("{}-{}", product_id, Utc::now().timestamp_millis()))
    }
}

/// Deterministic generator producing `"<product id>-1"`, `"<product id>-2"`, ...
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    /// Creates a generator starting at 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many identifiers have been handed out.
    pub fn issued(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}

impl Clone for SequentialIdGenerator {
    fn clone(&self) -> Self {
        Self {
            next: AtomicU64::new(self.issued()),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self, product_id: &ProductId) -> LineItemId {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        LineItemId::new(format!("{product_id}-{n}"))
    }
}

//! Per-session cart registry.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use cart::{Cart, CartEvent, CartSnapshot};
use tokio::sync::RwLock;

/// Idle time after which a session ends when no TTL is configured.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(2 * 60 * 60);

#[derive(Debug)]
struct SessionEntry {
    cart: Cart,
    last_touched: Instant,
}

impl SessionEntry {
    fn is_idle(&self, ttl: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.last_touched) >= ttl
    }
}

/// Carts keyed by session identifier.
///
/// Every mutation holds the write lock for its whole duration, so operations
/// on one session never interleave. A session exists only while its cart has
/// been changed at least once, and ends after `ttl` without mutations.
#[derive(Debug)]
pub struct CartSessions {
    carts: RwLock<HashMap<String, SessionEntry>>,
    checkouts: Mutex<HashSet<String>>,
    ttl: Duration,
}

impl Default for CartSessions {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_TTL)
    }
}

impl CartSessions {
    /// Creates an empty registry whose sessions end after `ttl` idle.
    pub fn new(ttl: Duration) -> Self {
        Self {
            carts: RwLock::new(HashMap::new()),
            checkouts: Mutex::new(HashSet::new()),
            ttl,
        }
    }

    /// Returns a snapshot of the session's cart, empty if it has none or it
    /// has gone idle.
    pub async fn snapshot(&self, session: &str) -> CartSnapshot {
        let now = Instant::now();
        self.carts
            .read()
            .await
            .get(session)
            .filter(|entry| !entry.is_idle(self.ttl, now))
            .map(|entry| entry.cart.snapshot())
            .unwrap_or_default()
    }

    /// Runs `f` against the session's cart, starting a fresh cart if the
    /// session has none.
    ///
    /// A fresh cart is only kept if `f` left something in it. Returns the
    /// closure's result together with the resulting snapshot.
    pub async fn mutate<T>(&self, session: &str, f: impl FnOnce(&mut Cart) -> T) -> (T, CartSnapshot) {
        let mut carts = self.carts.write().await;
        let now = Instant::now();
        self.drop_if_idle(&mut carts, session, now);

        if let Some(entry) = carts.get_mut(session) {
            let output = f(&mut entry.cart);
            entry.last_touched = now;
            return (output, entry.cart.snapshot());
        }

        let mut cart = Cart::new();
        let output = f(&mut cart);
        let snapshot = cart.snapshot();
        if !cart.is_empty() {
            carts.insert(
                session.to_string(),
                SessionEntry {
                    cart,
                    last_touched: now,
                },
            );
        }
        (output, snapshot)
    }

    /// Runs `f` against the session's cart only if the session exists.
    pub async fn mutate_existing<T>(
        &self,
        session: &str,
        f: impl FnOnce(&mut Cart) -> T,
    ) -> Option<T> {
        let mut carts = self.carts.write().await;
        let now = Instant::now();
        self.drop_if_idle(&mut carts, session, now);

        carts.get_mut(session).map(|entry| {
            entry.last_touched = now;
            f(&mut entry.cart)
        })
    }

    /// Marks a checkout as running for the session and captures its cart.
    ///
    /// Returns `None` if a checkout for the same session is already running.
    /// The mark is lifted when the returned lease is dropped.
    pub async fn begin_checkout(&self, session: &str) -> Option<CheckoutLease<'_>> {
        if !self.lock_checkouts().insert(session.to_string()) {
            return None;
        }
        let mut lease = CheckoutLease {
            sessions: self,
            session: session.to_string(),
            snapshot: CartSnapshot::default(),
        };
        lease.snapshot = self.snapshot(session).await;
        Some(lease)
    }

    /// Returns true while a checkout for the session is running.
    pub fn is_checking_out(&self, session: &str) -> bool {
        self.lock_checkouts().contains(session)
    }

    /// Ends a session, discarding its cart. Returns false if it did not exist.
    pub async fn end(&self, session: &str) -> bool {
        let removed = self.carts.write().await.remove(session).is_some();
        if removed {
            tracing::debug!(session, "session ended");
        }
        removed
    }

    /// Ends every session idle for at least the TTL. Returns how many ended.
    pub async fn evict_idle(&self) -> usize {
        let now = Instant::now();
        let mut carts = self.carts.write().await;
        let before = carts.len();
        carts.retain(|_, entry| !entry.is_idle(self.ttl, now));
        let evicted = before - carts.len();
        if evicted > 0 {
            metrics::counter!("cart_sessions_evicted_total").increment(evicted as u64);
            tracing::info!(evicted, remaining = carts.len(), "idle sessions ended");
        }
        evicted
    }

    /// Returns the number of live sessions.
    pub async fn len(&self) -> usize {
        self.carts.read().await.len()
    }

    /// Returns true if no session holds a cart.
    pub async fn is_empty(&self) -> bool {
        self.carts.read().await.is_empty()
    }

    fn drop_if_idle(&self, carts: &mut HashMap<String, SessionEntry>, session: &str, now: Instant) {
        if carts
            .get(session)
            .is_some_and(|entry| entry.is_idle(self.ttl, now))
        {
            carts.remove(session);
            tracing::debug!(session, "idle session ended on access");
        }
    }

    fn lock_checkouts(&self) -> MutexGuard<'_, HashSet<String>> {
        self.checkouts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// An exclusive checkout on one session, holding the cart as it was when
/// the checkout began.
#[derive(Debug)]
pub struct CheckoutLease<'a> {
    sessions: &'a CartSessions,
    session: String,
    snapshot: CartSnapshot,
}

impl CheckoutLease<'_> {
    /// The cart contents being ordered.
    pub fn snapshot(&self) -> &CartSnapshot {
        &self.snapshot
    }

    /// Takes the ordered lines out of the cart once the order is stored.
    ///
    /// Items added while the checkout ran stay in the cart. Returns false if
    /// the session ended meanwhile, in which case nothing is touched.
    pub async fn settle(self) -> bool {
        let ordered = &self.snapshot;
        self.sessions
            .mutate_existing(&self.session, |cart| remove_ordered(cart, ordered))
            .await
            .is_some()
    }
}

impl Drop for CheckoutLease<'_> {
    fn drop(&mut self) {
        self.sessions.lock_checkouts().remove(&self.session);
    }
}

fn remove_ordered(cart: &mut Cart, ordered: &CartSnapshot) -> Vec<CartEvent> {
    if cart.snapshot() == *ordered {
        return cart.clear();
    }

    let mut events = Vec::new();
    for line in &ordered.items {
        let Some(current) = cart.get_item(&line.id) else {
            continue;
        };
        let remaining = i64::from(current.quantity()) - i64::from(line.quantity());
        events.extend(cart.update_quantity(&line.id, remaining));
    }
    events
}

//! Core aggregate and domain event traits.

use serde::{Serialize, de::DeserializeOwned};

/// Trait for domain events.
///
/// Events are past-tense facts about a change that was decided and applied.
pub trait DomainEvent: Serialize + DeserializeOwned + Send + Sync + Clone {
    /// Returns the event type name.
    fn event_type(&self) -> &'static str;
}

/// Trait for aggregates whose state changes only by applying events.
///
/// An aggregate is a cluster of domain objects that can be treated as a single unit.
/// Operations first decide which events describe the change, then apply them:
/// - Deciding reads state and never mutates it
/// - Applying is pure, deterministic and total
pub trait Aggregate: Send + Sync {
    /// The type of events this aggregate produces and consumes.
    type Event: DomainEvent;

    /// Returns the aggregate type name.
    fn aggregate_type() -> &'static str;

    /// Applies one event. Never fails: an event records something already decided.
    fn apply(&mut self, event: Self::Event);

    /// Applies multiple events in sequence.
    fn apply_events(&mut self, events: impl IntoIterator<Item = Self::Event>) {
        for event in events {
            self.apply(event);
        }
    }
}

//! # Event Bus
//!
//! Publish/subscribe for engine events. Fire-and-forget: no acknowledgement,
//! no ordering guarantee across independent commands.

use crate::DialecticError;
use crate::primitives::DEFAULT_EVENT_HISTORY;
use crate::trace::TraceMeta;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

/// A domain event emitted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub kind: String,
    pub payload: Value,
    pub meta: TraceMeta,
}

/// Where the engine publishes events.
pub trait EventBus {
    fn publish(&self, event: &Event) -> Result<(), DialecticError>;
}

impl<B: EventBus + ?Sized> EventBus for Arc<B> {
    fn publish(&self, event: &Event) -> Result<(), DialecticError> {
        (**self).publish(event)
    }
}

impl<B: EventBus + ?Sized> EventBus for &B {
    fn publish(&self, event: &Event) -> Result<(), DialecticError> {
        (**self).publish(event)
    }
}

/// Handler invoked for each matching event.
pub type Subscriber = Box<dyn Fn(&Event) + Send + Sync>;

struct Subscription {
    kind: Option<String>,
    handler: Subscriber,
}

/// In-process bus with synchronous delivery and a bounded history.
///
/// Handlers run inside `publish` while the subscriber list is locked; a
/// handler must not subscribe on the same bus.
pub struct InMemoryEventBus {
    subscriptions: Mutex<Vec<Subscription>>,
    history: Mutex<VecDeque<Event>>,
    capacity: usize,
}

impl std::fmt::Debug for InMemoryEventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryEventBus")
            .field("subscriptions", &lock(&self.subscriptions).len())
            .field("history", &lock(&self.history).len())
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

// A poisoned lock only means a handler panicked; the data is still usable.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

impl InMemoryEventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_EVENT_HISTORY)
    }

    /// Keep at most `capacity` events in history (zero disables history).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            subscriptions: Mutex::new(Vec::new()),
            history: Mutex::new(VecDeque::new()),
            capacity,
        }
    }

    /// Register a handler for every event, or only for `kind`.
    pub fn subscribe(&self, kind: Option<&str>, handler: impl Fn(&Event) + Send + Sync + 'static) {
        lock(&self.subscriptions).push(Subscription {
            kind: kind.map(str::to_string),
            handler: Box::new(handler),
        });
    }

    /// Retained events, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<Event> {
        lock(&self.history).iter().cloned().collect()
    }

    /// The most recent `limit` events, oldest first.
    #[must_use]
    pub fn recent(&self, limit: usize) -> Vec<Event> {
        let history = lock(&self.history);
        let skip = history.len().saturating_sub(limit);
        history.iter().skip(skip).cloned().collect()
    }

    pub fn clear_history(&self) {
        lock(&self.history).clear();
    }
}

impl EventBus for InMemoryEventBus {
    fn publish(&self, event: &Event) -> Result<(), DialecticError> {
        if self.capacity > 0 {
            let mut history = lock(&self.history);
            if history.len() >= self.capacity {
                history.pop_front();
            }
            history.push_back(event.clone());
        }

        for subscription in lock(&self.subscriptions).iter() {
            if subscription
                .kind
                .as_deref()
                .is_none_or(|kind| kind == event.kind)
            {
                (subscription.handler)(event);
            }
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

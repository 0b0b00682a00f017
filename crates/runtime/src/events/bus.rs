//! Broadcast event bus implementation.

use tokio::sync::broadcast;

use super::RuntimeEvent;

/// Fan-out channel for [`RuntimeEvent`]s.
///
/// Publishing never blocks; slow subscribers observe `Lagged` and skip ahead.
#[derive(Clone, Debug)]
pub struct EventBus {
    tx: broadcast::Sender<RuntimeEvent>,
}

impl EventBus {
    /// Creates a new event bus with default capacity
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    pub fn publish(&self, event: RuntimeEvent) {
        if self.tx.send(event).is_err() {
            // No subscribers - this is normal, not an error
            tracing::trace!("no subscribers for runtime event");
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<RuntimeEvent> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

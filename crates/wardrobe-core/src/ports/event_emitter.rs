//! Event emitter trait for cross-crate event broadcasting.
//!
//! This module defines the abstraction for emitting wardrobe events.
//! Implementations handle transport details (channels, UI bridges, etc.).

use tokio::sync::broadcast;

use crate::events::WardrobeEvent;

/// Trait for emitting wardrobe events.
///
/// `emit` is synchronous: the selection store relies on it to deliver the
/// `SelectionChanged` / `OutfitChanged` pair in order within a single
/// mutation call. Implementations must not block.
pub trait WardrobeEventEmitter: Send + Sync {
    /// Emit an event.
    fn emit(&self, event: WardrobeEvent);

    /// Clone this emitter into a boxed trait object.
    ///
    /// This enables cloning of `Arc<dyn WardrobeEventEmitter>` without
    /// requiring the underlying type to implement Clone.
    fn clone_box(&self) -> Box<dyn WardrobeEventEmitter>;
}

/// A no-op event emitter for tests and CLI contexts without subscribers.
#[derive(Debug, Clone, Default)]
pub struct NoopEmitter;

impl NoopEmitter {
    /// Create a new no-op emitter.
    pub const fn new() -> Self {
        Self
    }
}

impl WardrobeEventEmitter for NoopEmitter {
    fn emit(&self, _event: WardrobeEvent) {
        // Intentionally do nothing
    }

    fn clone_box(&self) -> Box<dyn WardrobeEventEmitter> {
        Box::new(self.clone())
    }
}

/// Broadcast-channel-backed emitter for adapters that consume events as a
/// stream.
///
/// Sending never blocks; when no receiver is subscribed the event is
/// dropped, which mirrors the no-op behavior.
#[derive(Debug, Clone)]
pub struct ChannelEmitter {
    tx: broadcast::Sender<WardrobeEvent>,
}

impl ChannelEmitter {
    /// Create an emitter with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Subscribe to the event stream.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<WardrobeEvent> {
        self.tx.subscribe()
    }
}

impl Default for ChannelEmitter {
    fn default() -> Self {
        Self::new(64)
    }
}

impl WardrobeEventEmitter for ChannelEmitter {
    fn emit(&self, event: WardrobeEvent) {
        // A send error only means there are no subscribers right now.
        let _ = self.tx.send(event);
    }

    fn clone_box(&self) -> Box<dyn WardrobeEventEmitter> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_noop_emitter() {
        let emitter = NoopEmitter::new();
        emitter.emit(WardrobeEvent::OutfitChanged { outfit: None });
    }

    #[test]
    fn test_arc_emitter() {
        let emitter: Arc<dyn WardrobeEventEmitter> = Arc::new(NoopEmitter::new());
        emitter.emit(WardrobeEvent::SelectionChanged { items: vec![] });
    }

    #[tokio::test]
    async fn test_channel_emitter_delivers_in_order() {
        let emitter = ChannelEmitter::new(8);
        let mut rx = emitter.subscribe();

        emitter.emit(WardrobeEvent::SelectionChanged { items: vec![] });
        emitter.emit(WardrobeEvent::OutfitChanged { outfit: None });

        assert!(matches!(
            rx.recv().await.unwrap(),
            WardrobeEvent::SelectionChanged { .. }
        ));
        assert!(matches!(
            rx.recv().await.unwrap(),
            WardrobeEvent::OutfitChanged { .. }
        ));
    }

    #[test]
    fn test_channel_emitter_without_subscribers_is_noop() {
        let emitter = ChannelEmitter::new(8);
        emitter.emit(WardrobeEvent::OutfitChanged { outfit: None });
    }
}

//! Reactive store for the current selection and its derived outfit.
//!
//! The store owns the in-memory selection sequence as the source of truth;
//! persisted storage only mirrors it. Every mutation performs, in order:
//!
//! 1. emit [`WardrobeEvent::SelectionChanged`] with the new sequence,
//! 2. persist the sequence best-effort (failures are logged, never rolled
//!    back),
//! 3. recompute the derived outfit and emit
//!    [`WardrobeEvent::OutfitChanged`].
//!
//! A subscriber reacting to step 1 may read a momentarily stale derived
//! outfit; both events arrive within the same call, so consumers needing
//! both treat them as eventually consistent within one tick.

use std::sync::{Arc, Mutex};

use tracing::{debug, error, info};

use crate::domain::{ClothingItem, Outfit};
use crate::events::WardrobeEvent;
use crate::ports::{SelectionStateRepository, WardrobeEventEmitter};

#[derive(Default)]
struct State {
    items: Vec<ClothingItem>,
    outfit: Option<Outfit>,
}

/// Reactive selection store.
pub struct SelectionStore {
    state: Mutex<State>,
    repo: Arc<dyn SelectionStateRepository>,
    emitter: Arc<dyn WardrobeEventEmitter>,
}

impl SelectionStore {
    /// Construct the store, restoring any persisted selection.
    ///
    /// A missing or unreadable persisted selection restores as empty; no
    /// error surfaces to the caller. The derived outfit is computed from
    /// the restored sequence without emitting events.
    pub async fn new(
        repo: Arc<dyn SelectionStateRepository>,
        emitter: Arc<dyn WardrobeEventEmitter>,
    ) -> Self {
        let items = repo.load().await;
        let outfit = Outfit::from_selection(&items);
        Self {
            state: Mutex::new(State { items, outfit }),
            repo,
            emitter,
        }
    }

    /// The current selection sequence, in insertion order.
    pub fn selected_items(&self) -> Vec<ClothingItem> {
        self.state.lock().unwrap().items.clone()
    }

    /// The current derived outfit, if the selection is non-empty.
    pub fn current_outfit(&self) -> Option<Outfit> {
        self.state.lock().unwrap().outfit.clone()
    }

    /// Number of selected items.
    pub fn selection_count(&self) -> usize {
        self.state.lock().unwrap().items.len()
    }

    /// Whether an item with this id is currently selected.
    pub fn is_item_selected(&self, id: &str) -> bool {
        self.state.lock().unwrap().items.iter().any(|i| i.id == id)
    }

    /// Append an item to the selection.
    ///
    /// A no-op when an item with the same id is already selected.
    pub async fn add_item(&self, item: ClothingItem) {
        let items = {
            let mut state = self.state.lock().unwrap();
            if state.items.iter().any(|i| i.id == item.id) {
                debug!(id = %item.id, name = %item.name, "item already selected");
                return;
            }
            info!(id = %item.id, name = %item.name, "item added to selection");
            state.items.push(item);
            state.items.clone()
        };
        self.publish_and_persist(items).await;
    }

    /// Remove the item with this id from the selection.
    ///
    /// An absent id is a no-op that still republishes and persists the
    /// (unchanged) sequence; subscribers see the events either way.
    pub async fn remove_item(&self, id: &str) {
        let items = {
            let mut state = self.state.lock().unwrap();
            state.items.retain(|i| i.id != id);
            state.items.clone()
        };
        info!(id, "item removed from selection");
        self.publish_and_persist(items).await;
    }

    /// Empty the selection and erase the persisted key.
    pub async fn clear_selection(&self) {
        self.state.lock().unwrap().items.clear();
        self.emitter
            .emit(WardrobeEvent::SelectionChanged { items: Vec::new() });
        if let Err(e) = self.repo.clear().await {
            error!("failed to erase persisted selection: {e}");
        }
        {
            let mut state = self.state.lock().unwrap();
            state.outfit = None;
        }
        self.emitter.emit(WardrobeEvent::OutfitChanged { outfit: None });
        info!("selection cleared");
    }

    /// Replace the selection wholesale with a saved outfit.
    ///
    /// The derived outfit becomes exactly the given outfit object,
    /// bypassing synthesis.
    pub async fn set_outfit(&self, outfit: Outfit) {
        let items = {
            let mut state = self.state.lock().unwrap();
            state.items = outfit.items.clone();
            state.items.clone()
        };
        self.emitter
            .emit(WardrobeEvent::SelectionChanged { items: items.clone() });
        if let Err(e) = self.repo.save(&items).await {
            error!("failed to persist selection: {e}");
        }
        {
            let mut state = self.state.lock().unwrap();
            state.outfit = Some(outfit.clone());
        }
        self.emitter.emit(WardrobeEvent::OutfitChanged {
            outfit: Some(outfit),
        });
    }

    /// Shared tail of add/remove: publish, persist, re-derive.
    async fn publish_and_persist(&self, items: Vec<ClothingItem>) {
        self.emitter
            .emit(WardrobeEvent::SelectionChanged { items: items.clone() });
        if let Err(e) = self.repo.save(&items).await {
            error!("failed to persist selection: {e}");
        }
        let outfit = Outfit::from_selection(&items);
        {
            let mut state = self.state.lock().unwrap();
            state.outfit = outfit.clone();
        }
        self.emitter.emit(WardrobeEvent::OutfitChanged { outfit });
    }
}

//! Canonical event union for all cross-adapter events.
//!
//! This module is the single source of truth for events emitted by the
//! selection store and the wardrobe service.
//!
//! # Wire Format
//!
//! Events are serialized with a `type` tag:
//!
//! ```json
//! { "type": "selection_changed", "items": [...] }
//! ```
//!
//! # Ordering
//!
//! Emitters deliver events synchronously, so the guarantee of
//! `SelectionStore` holds: subscribers always see `SelectionChanged` before
//! the `OutfitChanged` that the same mutation produced.

use serde::{Deserialize, Serialize};

use crate::domain::{ClothingItem, ClothingType, Outfit};

/// Lightweight item representation for event payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSummary {
    /// Id of the item.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Garment category.
    #[serde(rename = "type")]
    pub kind: ClothingType,
}

impl From<&ClothingItem> for ItemSummary {
    fn from(item: &ClothingItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            kind: item.kind,
        }
    }
}

/// Canonical event types for all adapters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WardrobeEvent {
    /// The selection sequence changed (add, remove, clear, or set-outfit).
    SelectionChanged {
        /// The full new selection sequence, in order.
        items: Vec<ClothingItem>,
    },

    /// The derived current outfit was recomputed or replaced.
    ///
    /// `None` means the selection is empty and no outfit is derived.
    OutfitChanged {
        /// The new derived outfit, if any.
        outfit: Option<Outfit>,
    },

    /// A clothing item was persisted to the wardrobe.
    ItemSaved {
        /// Summary of the stored item (with its assigned id).
        item: ItemSummary,
    },

    /// A clothing item was removed from the wardrobe.
    ItemDeleted {
        /// Id of the removed item.
        #[serde(rename = "itemId")]
        item_id: String,
    },

    /// An outfit was persisted.
    OutfitSaved {
        /// Id assigned to the stored outfit.
        #[serde(rename = "outfitId")]
        outfit_id: String,
        /// Outfit name.
        name: String,
    },

    /// A saved outfit was removed.
    OutfitDeleted {
        /// Id of the removed outfit.
        #[serde(rename = "outfitId")]
        outfit_id: String,
    },
}

impl WardrobeEvent {
    /// Get the event name for wire protocols.
    pub const fn event_name(&self) -> &'static str {
        match self {
            Self::SelectionChanged { .. } => "selection:changed",
            Self::OutfitChanged { .. } => "selection:outfit_changed",
            Self::ItemSaved { .. } => "wardrobe:item_saved",
            Self::ItemDeleted { .. } => "wardrobe:item_deleted",
            Self::OutfitSaved { .. } => "wardrobe:outfit_saved",
            Self::OutfitDeleted { .. } => "wardrobe:outfit_deleted",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization() {
        let event = WardrobeEvent::ItemDeleted {
            item_id: "1724854000000".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"item_deleted\""));
        assert!(json.contains("\"itemId\":\"1724854000000\""));
    }

    #[test]
    fn test_event_names() {
        assert_eq!(
            WardrobeEvent::SelectionChanged { items: vec![] }.event_name(),
            "selection:changed"
        );
        assert_eq!(
            WardrobeEvent::OutfitChanged { outfit: None }.event_name(),
            "selection:outfit_changed"
        );
    }
}

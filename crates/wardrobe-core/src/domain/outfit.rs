//! Outfit domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::clothing::ClothingItem;

/// Sentinel id of the outfit synthesized from the live selection.
pub const CURRENT_SELECTION_ID: &str = "current-selection";

/// A named grouping of clothing items, optionally with a generated image.
///
/// Saved outfits receive a time-derived id from the repository on insert;
/// the transient "current selection" outfit uses [`CURRENT_SELECTION_ID`].
/// Duplicate items (by id) are not enforced against here - the selection
/// store's add no-op is the only dedup point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outfit {
    /// Unique identifier of the outfit.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// The garments composing the outfit, in selection order.
    pub items: Vec<ClothingItem>,
    /// Generated illustration, set after a successful generation call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// When the outfit was created.
    pub created_at: DateTime<Utc>,
    /// Whether the user marked the outfit as favorite.
    pub is_favorite: bool,
    /// Optional longer description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Outfit {
    /// Synthesize the derived "current selection" outfit from a selection
    /// sequence. Returns `None` for an empty selection.
    ///
    /// The name carries the item count in the legacy web client's Spanish
    /// format so persisted data stays interchangeable with it.
    #[must_use]
    pub fn from_selection(items: &[ClothingItem]) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(Self {
            id: CURRENT_SELECTION_ID.to_string(),
            name: format!("Conjunto Actual ({} prendas)", items.len()),
            items: items.to_vec(),
            image_url: None,
            created_at: Utc::now(),
            is_favorite: false,
            description: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ClothingType;

    #[test]
    fn test_from_selection_empty_is_none() {
        assert!(Outfit::from_selection(&[]).is_none());
    }

    #[test]
    fn test_from_selection_mirrors_items_and_order() {
        let items = vec![
            ClothingItem::new("1", "Camisa", ClothingType::Shirt, "blanco", "http://a"),
            ClothingItem::new("4", "Pantalón", ClothingType::Pants, "negro", "http://b"),
        ];
        let outfit = Outfit::from_selection(&items).unwrap();

        assert_eq!(outfit.id, CURRENT_SELECTION_ID);
        assert_eq!(outfit.name, "Conjunto Actual (2 prendas)");
        assert_eq!(outfit.items, items);
        assert!(!outfit.is_favorite);
        assert!(outfit.image_url.is_none());
    }
}

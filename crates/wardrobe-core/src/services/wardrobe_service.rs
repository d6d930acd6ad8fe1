//! Wardrobe service - orchestrates catalogue and outfit operations.
//!
//! A thin facade over the injected repositories with an asymmetric error
//! contract: reads degrade to a safe fallback on storage failure, writes
//! propagate errors to the caller.

use std::sync::Arc;

use tracing::warn;

use crate::domain::{seed_catalog, ClothingFilter, ClothingItem, Outfit};
use crate::events::{ItemSummary, WardrobeEvent};
use crate::ports::{
    CoreError, OutfitRepository, RepositoryError, WardrobeEventEmitter, WardrobeRepository,
};
use crate::utils::validation::{validate_item, validate_outfit};

/// Service for wardrobe and outfit management.
pub struct WardrobeService {
    wardrobe: Arc<dyn WardrobeRepository>,
    outfits: Arc<dyn OutfitRepository>,
    emitter: Arc<dyn WardrobeEventEmitter>,
}

impl WardrobeService {
    /// Create a new wardrobe service with the given repositories.
    pub fn new(
        wardrobe: Arc<dyn WardrobeRepository>,
        outfits: Arc<dyn OutfitRepository>,
        emitter: Arc<dyn WardrobeEventEmitter>,
    ) -> Self {
        Self {
            wardrobe,
            outfits,
            emitter,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Clothing Operations
    // ─────────────────────────────────────────────────────────────────────

    /// The full catalogue: seed items followed by persisted items.
    ///
    /// Never fails outward - a storage read error degrades to the seed
    /// catalogue alone.
    pub async fn my_clothes(&self) -> Vec<ClothingItem> {
        let mut all = seed_catalog();
        match self.wardrobe.list().await {
            Ok(stored) => all.extend(stored),
            Err(e) => warn!("failed to load persisted items, serving seed catalogue only: {e}"),
        }
        all
    }

    /// Persist a new clothing item.
    ///
    /// The item is validated before any side effect; the returned item
    /// carries the repository-assigned id (any caller-supplied id is
    /// discarded). Storage errors propagate.
    pub async fn save_item(&self, item: &ClothingItem) -> Result<ClothingItem, CoreError> {
        validate_item(item)?;
        let stored = self.wardrobe.insert(item).await.map_err(CoreError::from)?;
        self.emitter.emit(WardrobeEvent::ItemSaved {
            item: ItemSummary::from(&stored),
        });
        Ok(stored)
    }

    /// Remove a persisted item by id.
    ///
    /// Seed-catalogue ids are unaffected by this path: the persisted list
    /// is filtered and seed items never live there.
    pub async fn delete_item(&self, id: &str) -> Result<(), CoreError> {
        self.wardrobe.delete(id).await.map_err(CoreError::from)?;
        self.emitter.emit(WardrobeEvent::ItemDeleted {
            item_id: id.to_string(),
        });
        Ok(())
    }

    /// Replace a persisted item by id.
    ///
    /// Fails with a not-found error when the id is absent from persisted
    /// storage (seed items cannot be updated this way).
    pub async fn update_item(&self, item: &ClothingItem) -> Result<ClothingItem, CoreError> {
        validate_item(item)?;
        self.wardrobe.update(item).await.map_err(CoreError::from)
    }

    /// Filter the full catalogue by the given conjunctive criteria.
    pub async fn filter_clothes(&self, filter: &ClothingFilter) -> Vec<ClothingItem> {
        self.my_clothes()
            .await
            .into_iter()
            .filter(|item| filter.matches(item))
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Outfit Operations
    // ─────────────────────────────────────────────────────────────────────

    /// All saved outfits. Read errors degrade to an empty list.
    pub async fn saved_outfits(&self) -> Vec<Outfit> {
        match self.outfits.list().await {
            Ok(outfits) => outfits,
            Err(e) => {
                warn!("failed to load saved outfits: {e}");
                Vec::new()
            }
        }
    }

    /// Persist an outfit. The returned outfit carries the assigned id;
    /// all other fields are preserved.
    pub async fn save_outfit(&self, outfit: &Outfit) -> Result<Outfit, CoreError> {
        validate_outfit(outfit)?;
        let stored = self.outfits.insert(outfit).await.map_err(CoreError::from)?;
        self.emitter.emit(WardrobeEvent::OutfitSaved {
            outfit_id: stored.id.clone(),
            name: stored.name.clone(),
        });
        Ok(stored)
    }

    /// Remove a saved outfit by id.
    pub async fn delete_outfit(&self, id: &str) -> Result<(), CoreError> {
        self.outfits.delete(id).await.map_err(CoreError::from)?;
        self.emitter.emit(WardrobeEvent::OutfitDeleted {
            outfit_id: id.to_string(),
        });
        Ok(())
    }

    /// Flip the favorite flag of a saved outfit.
    ///
    /// Fails with a not-found error, leaving storage untouched, when the
    /// id is absent.
    pub async fn toggle_favorite(&self, id: &str) -> Result<Outfit, CoreError> {
        self.outfits
            .toggle_favorite(id)
            .await
            .map_err(CoreError::from)
    }

    /// Find a saved outfit by id.
    pub async fn find_outfit(&self, id: &str) -> Result<Outfit, CoreError> {
        self.saved_outfits()
            .await
            .into_iter()
            .find(|o| o.id == id)
            .ok_or_else(|| CoreError::Repository(RepositoryError::NotFound(format!("outfit {id}"))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ClothingType;
    use crate::ports::NoopEmitter;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockWardrobeRepo {
        items: Mutex<Vec<ClothingItem>>,
        next_id: Mutex<u64>,
        fail_reads: bool,
    }

    impl MockWardrobeRepo {
        fn new() -> Self {
            Self {
                items: Mutex::new(vec![]),
                next_id: Mutex::new(1_724_854_000_000),
                fail_reads: false,
            }
        }

        fn failing_reads() -> Self {
            Self {
                fail_reads: true,
                ..Self::new()
            }
        }

        fn assign_id(&self) -> String {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            next.to_string()
        }
    }

    #[async_trait]
    impl WardrobeRepository for MockWardrobeRepo {
        async fn list(&self) -> Result<Vec<ClothingItem>, RepositoryError> {
            if self.fail_reads {
                return Err(RepositoryError::Serialization("bad payload".to_string()));
            }
            Ok(self.items.lock().unwrap().clone())
        }

        async fn insert(&self, item: &ClothingItem) -> Result<ClothingItem, RepositoryError> {
            let mut stored = item.clone();
            stored.id = self.assign_id();
            self.items.lock().unwrap().push(stored.clone());
            Ok(stored)
        }

        async fn update(&self, item: &ClothingItem) -> Result<ClothingItem, RepositoryError> {
            let mut items = self.items.lock().unwrap();
            match items.iter_mut().find(|i| i.id == item.id) {
                Some(slot) => {
                    slot.clone_from(item);
                    Ok(item.clone())
                }
                None => Err(RepositoryError::NotFound(format!("item {}", item.id))),
            }
        }

        async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
            self.items.lock().unwrap().retain(|i| i.id != id);
            Ok(())
        }
    }

    struct MockOutfitRepo {
        outfits: Mutex<Vec<Outfit>>,
    }

    impl MockOutfitRepo {
        fn new() -> Self {
            Self {
                outfits: Mutex::new(vec![]),
            }
        }
    }

    #[async_trait]
    impl OutfitRepository for MockOutfitRepo {
        async fn list(&self) -> Result<Vec<Outfit>, RepositoryError> {
            Ok(self.outfits.lock().unwrap().clone())
        }

        async fn insert(&self, outfit: &Outfit) -> Result<Outfit, RepositoryError> {
            let mut stored = outfit.clone();
            stored.id = format!("generated-{}", self.outfits.lock().unwrap().len() + 1);
            self.outfits.lock().unwrap().push(stored.clone());
            Ok(stored)
        }

        async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
            self.outfits.lock().unwrap().retain(|o| o.id != id);
            Ok(())
        }

        async fn toggle_favorite(&self, id: &str) -> Result<Outfit, RepositoryError> {
            let mut outfits = self.outfits.lock().unwrap();
            match outfits.iter_mut().find(|o| o.id == id) {
                Some(outfit) => {
                    outfit.is_favorite = !outfit.is_favorite;
                    Ok(outfit.clone())
                }
                None => Err(RepositoryError::NotFound(format!("outfit {id}"))),
            }
        }
    }

    fn service() -> WardrobeService {
        WardrobeService::new(
            Arc::new(MockWardrobeRepo::new()),
            Arc::new(MockOutfitRepo::new()),
            Arc::new(NoopEmitter),
        )
    }

    fn item(name: &str) -> ClothingItem {
        ClothingItem::new(
            "caller-supplied",
            name,
            ClothingType::Shirt,
            "verde",
            "https://example.com/img.png",
        )
    }

    #[tokio::test]
    async fn test_my_clothes_concatenates_seed_and_persisted() {
        let svc = service();
        assert_eq!(svc.my_clothes().await.len(), 16);

        svc.save_item(&item("Camisa Verde")).await.unwrap();
        let all = svc.my_clothes().await;
        assert_eq!(all.len(), 17);
        assert_eq!(all[0].id, "1", "seed items come first");
        assert_eq!(all[16].name, "Camisa Verde");
    }

    #[tokio::test]
    async fn test_my_clothes_degrades_to_seed_on_read_error() {
        let svc = WardrobeService::new(
            Arc::new(MockWardrobeRepo::failing_reads()),
            Arc::new(MockOutfitRepo::new()),
            Arc::new(NoopEmitter),
        );
        assert_eq!(svc.my_clothes().await.len(), 16);
    }

    #[tokio::test]
    async fn test_save_item_reassigns_id() {
        let svc = service();
        let stored = svc.save_item(&item("Camisa Verde")).await.unwrap();
        assert_ne!(stored.id, "caller-supplied");
    }

    #[tokio::test]
    async fn test_save_item_validation_aborts_before_side_effect() {
        let svc = service();
        let mut bad = item("");
        bad.name = String::new();
        assert!(matches!(
            svc.save_item(&bad).await,
            Err(CoreError::Validation(_))
        ));
        assert_eq!(svc.my_clothes().await.len(), 16, "nothing was persisted");
    }

    #[tokio::test]
    async fn test_delete_seed_id_leaves_catalogue_intact() {
        let svc = service();
        svc.delete_item("1").await.unwrap();
        let all = svc.my_clothes().await;
        assert_eq!(all.len(), 16);
        assert!(all.iter().any(|i| i.id == "1"), "seed item survives delete");
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let svc = service();
        let result = svc.update_item(&item("Camisa Verde")).await;
        assert!(matches!(
            result,
            Err(CoreError::Repository(RepositoryError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn test_filter_color_uppercase_substring() {
        let svc = service();
        let filtered = svc
            .filter_clothes(&ClothingFilter {
                color: Some("AZUL".to_string()),
                ..ClothingFilter::default()
            })
            .await;
        // Seed catalogue: Camisa Azul Cielo, Jeans Azul Oscuro, Chaqueta
        // Denim Azul.
        assert_eq!(filtered.len(), 3);
        assert!(filtered.iter().any(|i| i.color == "azul oscuro"));
    }

    #[tokio::test]
    async fn test_filter_type_and_brand_conjunction() {
        let svc = service();
        let filtered = svc
            .filter_clothes(&ClothingFilter {
                kind: Some(ClothingType::Jacket),
                brand: Some("levi".to_string()),
                ..ClothingFilter::default()
            })
            .await;
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Chaqueta Denim Azul");
    }

    #[tokio::test]
    async fn test_outfit_round_trip_preserves_fields_except_id() {
        let svc = service();
        let outfit = Outfit {
            id: "mine".to_string(),
            name: "Look casual".to_string(),
            items: vec![item("Camisa Verde")],
            image_url: Some("https://example.com/render.png".to_string()),
            created_at: chrono::Utc::now(),
            is_favorite: true,
            description: Some("para el fin de semana".to_string()),
        };

        let stored = svc.save_outfit(&outfit).await.unwrap();
        assert_ne!(stored.id, "mine");

        let listed = svc.saved_outfits().await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, outfit.name);
        assert_eq!(listed[0].items, outfit.items);
        assert_eq!(listed[0].image_url, outfit.image_url);
        assert_eq!(listed[0].is_favorite, outfit.is_favorite);
        assert_eq!(listed[0].description, outfit.description);
    }

    #[tokio::test]
    async fn test_toggle_favorite_flips_in_place() {
        let svc = service();
        let outfit = Outfit {
            id: String::new(),
            name: "Look".to_string(),
            items: vec![item("Camisa")],
            image_url: None,
            created_at: chrono::Utc::now(),
            is_favorite: false,
            description: None,
        };
        let stored = svc.save_outfit(&outfit).await.unwrap();

        let toggled = svc.toggle_favorite(&stored.id).await.unwrap();
        assert!(toggled.is_favorite);
        let again = svc.toggle_favorite(&stored.id).await.unwrap();
        assert!(!again.is_favorite);
    }

    #[tokio::test]
    async fn test_toggle_favorite_unknown_id_leaves_storage_untouched() {
        let svc = service();
        let outfit = Outfit {
            id: String::new(),
            name: "Look".to_string(),
            items: vec![item("Camisa")],
            image_url: None,
            created_at: chrono::Utc::now(),
            is_favorite: false,
            description: None,
        };
        svc.save_outfit(&outfit).await.unwrap();

        let result = svc.toggle_favorite("missing").await;
        assert!(matches!(
            result,
            Err(CoreError::Repository(RepositoryError::NotFound(_)))
        ));
        let listed = svc.saved_outfits().await;
        assert!(!listed[0].is_favorite, "storage was not mutated");
    }
}

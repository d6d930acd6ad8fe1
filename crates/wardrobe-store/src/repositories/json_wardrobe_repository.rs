//! JSON-file implementation of the `WardrobeRepository` trait.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use wardrobe_core::{ClothingItem, RepositoryError, WardrobeRepository};

use crate::id::IdGenerator;
use crate::storage::JsonStorage;

const WARDROBE_KEY: &str = "wardrobe_items";

/// Persists user-added clothing items as a JSON array under the
/// `wardrobe_items` key.
///
/// A corrupt payload reads as an empty list, the same recovery the legacy
/// web client applied to unparseable local-storage entries.
pub struct JsonWardrobeRepository {
    storage: JsonStorage,
    ids: Arc<IdGenerator>,
}

impl JsonWardrobeRepository {
    /// Create a new wardrobe repository over the given storage.
    pub fn new(storage: JsonStorage, ids: Arc<IdGenerator>) -> Self {
        Self { storage, ids }
    }

    async fn load_all(&self) -> Result<Vec<ClothingItem>, RepositoryError> {
        match self.storage.read_key(WARDROBE_KEY).await {
            Ok(Some(items)) => Ok(items),
            Ok(None) => Ok(Vec::new()),
            Err(RepositoryError::Serialization(e)) => {
                warn!("discarding corrupt wardrobe payload: {e}");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl WardrobeRepository for JsonWardrobeRepository {
    async fn list(&self) -> Result<Vec<ClothingItem>, RepositoryError> {
        self.load_all().await
    }

    async fn insert(&self, item: &ClothingItem) -> Result<ClothingItem, RepositoryError> {
        let mut items = self.load_all().await?;
        let mut stored = item.clone();
        stored.id = self.ids.next_id();
        items.push(stored.clone());
        self.storage.write_key(WARDROBE_KEY, &items).await?;
        Ok(stored)
    }

    async fn update(&self, item: &ClothingItem) -> Result<ClothingItem, RepositoryError> {
        let mut items = self.load_all().await?;
        let slot = items
            .iter_mut()
            .find(|i| i.id == item.id)
            .ok_or_else(|| RepositoryError::NotFound(format!("item {}", item.id)))?;
        slot.clone_from(item);
        self.storage.write_key(WARDROBE_KEY, &items).await?;
        Ok(item.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let mut items = self.load_all().await?;
        items.retain(|i| i.id != id);
        self.storage.write_key(WARDROBE_KEY, &items).await
    }
}

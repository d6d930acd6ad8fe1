//! JSON-file implementation of the `OutfitRepository` trait.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use wardrobe_core::{Outfit, OutfitRepository, RepositoryError};

use crate::id::IdGenerator;
use crate::storage::JsonStorage;

const OUTFITS_KEY: &str = "saved_outfits";

/// Persists saved outfits as a JSON array under the `saved_outfits` key.
pub struct JsonOutfitRepository {
    storage: JsonStorage,
    ids: Arc<IdGenerator>,
}

impl JsonOutfitRepository {
    /// Create a new outfit repository over the given storage.
    pub fn new(storage: JsonStorage, ids: Arc<IdGenerator>) -> Self {
        Self { storage, ids }
    }

    async fn load_all(&self) -> Result<Vec<Outfit>, RepositoryError> {
        match self.storage.read_key(OUTFITS_KEY).await {
            Ok(Some(outfits)) => Ok(outfits),
            Ok(None) => Ok(Vec::new()),
            Err(RepositoryError::Serialization(e)) => {
                warn!("discarding corrupt outfits payload: {e}");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl OutfitRepository for JsonOutfitRepository {
    async fn list(&self) -> Result<Vec<Outfit>, RepositoryError> {
        self.load_all().await
    }

    async fn insert(&self, outfit: &Outfit) -> Result<Outfit, RepositoryError> {
        let mut outfits = self.load_all().await?;
        let mut stored = outfit.clone();
        stored.id = self.ids.next_id();
        outfits.push(stored.clone());
        self.storage.write_key(OUTFITS_KEY, &outfits).await?;
        Ok(stored)
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let mut outfits = self.load_all().await?;
        outfits.retain(|o| o.id != id);
        self.storage.write_key(OUTFITS_KEY, &outfits).await
    }

    async fn toggle_favorite(&self, id: &str) -> Result<Outfit, RepositoryError> {
        let mut outfits = self.load_all().await?;
        let outfit = outfits
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| RepositoryError::NotFound(format!("outfit {id}")))?;
        outfit.is_favorite = !outfit.is_favorite;
        let updated = outfit.clone();
        self.storage.write_key(OUTFITS_KEY, &outfits).await?;
        Ok(updated)
    }
}

//! JSON-file implementation of the `SelectionStateRepository` trait.

use async_trait::async_trait;
use tracing::warn;

use wardrobe_core::{ClothingItem, RepositoryError, SelectionStateRepository};

use crate::storage::JsonStorage;

const SELECTION_KEY: &str = "selected_items";

/// Mirrors the live selection sequence under the `selected_items` key.
///
/// The in-memory selection is authoritative, so any read failure here
/// silently loads as empty.
pub struct JsonSelectionStateRepository {
    storage: JsonStorage,
}

impl JsonSelectionStateRepository {
    /// Create a new selection state repository over the given storage.
    pub fn new(storage: JsonStorage) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl SelectionStateRepository for JsonSelectionStateRepository {
    async fn load(&self) -> Vec<ClothingItem> {
        match self.storage.read_key(SELECTION_KEY).await {
            Ok(Some(items)) => items,
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("failed to restore persisted selection: {e}");
                Vec::new()
            }
        }
    }

    async fn save(&self, items: &[ClothingItem]) -> Result<(), RepositoryError> {
        self.storage.write_key(SELECTION_KEY, &items).await
    }

    async fn clear(&self) -> Result<(), RepositoryError> {
        self.storage.remove_key(SELECTION_KEY).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use wardrobe_core::ClothingType;

    fn item(id: &str) -> ClothingItem {
        ClothingItem::new(
            id,
            "Camisa",
            ClothingType::Shirt,
            "blanco",
            "https://example.com/a.png",
        )
    }

    #[tokio::test]
    async fn test_load_empty_when_nothing_persisted() {
        let dir = TempDir::new().unwrap();
        let repo = JsonSelectionStateRepository::new(JsonStorage::new(dir.path()));
        assert!(repo.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_save_preserves_order() {
        let dir = TempDir::new().unwrap();
        let repo = JsonSelectionStateRepository::new(JsonStorage::new(dir.path()));

        repo.save(&[item("4"), item("1")]).await.unwrap();
        let loaded = repo.load().await;
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, "4");
        assert_eq!(loaded[1].id, "1");
    }

    #[tokio::test]
    async fn test_corrupt_payload_loads_as_empty() {
        let dir = TempDir::new().unwrap();
        tokio::fs::write(dir.path().join("selected_items.json"), b"not json")
            .await
            .unwrap();
        let repo = JsonSelectionStateRepository::new(JsonStorage::new(dir.path()));
        assert!(repo.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_clear_removes_payload() {
        let dir = TempDir::new().unwrap();
        let repo = JsonSelectionStateRepository::new(JsonStorage::new(dir.path()));

        repo.save(&[item("1")]).await.unwrap();
        repo.clear().await.unwrap();
        assert!(repo.load().await.is_empty());
        assert!(!dir.path().join("selected_items.json").exists());
    }
}

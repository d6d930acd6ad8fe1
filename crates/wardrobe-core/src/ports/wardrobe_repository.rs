//! Wardrobe repository trait definition.
//!
//! This port covers persistence of user-added clothing items only. The
//! seed catalogue is never written through this interface; merging seed and
//! persisted items belongs to `WardrobeService`.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::ClothingItem;

/// Repository for user-added clothing items.
///
/// # Design Rules
///
/// - `insert` assigns identity: a new time-derived id replaces whatever id
///   the caller supplied, the way a server would.
/// - `delete` filters by id and succeeds even when the id is absent; seed
///   and unknown ids are a silent no-op.
#[async_trait]
pub trait WardrobeRepository: Send + Sync {
    /// List all persisted items, oldest first.
    async fn list(&self) -> Result<Vec<ClothingItem>, RepositoryError>;

    /// Insert an item, assigning it a fresh id.
    ///
    /// Returns the stored item; its `id` always differs from the one the
    /// caller supplied.
    async fn insert(&self, item: &ClothingItem) -> Result<ClothingItem, RepositoryError>;

    /// Replace a persisted item by id.
    ///
    /// Returns `Err(RepositoryError::NotFound)` when the id is absent from
    /// persisted storage; seed items cannot be updated this way.
    async fn update(&self, item: &ClothingItem) -> Result<ClothingItem, RepositoryError>;

    /// Remove a persisted item by id. Absent ids (including seed ids) are
    /// a silent no-op.
    async fn delete(&self, id: &str) -> Result<(), RepositoryError>;
}

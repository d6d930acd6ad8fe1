//! Outfit repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::Outfit;

/// Repository for saved outfits.
///
/// Follows the same persistence pattern as [`super::WardrobeRepository`]
/// against a separate storage key: insert reassigns identity, delete is a
/// silent filter.
#[async_trait]
pub trait OutfitRepository: Send + Sync {
    /// List all saved outfits, oldest first.
    async fn list(&self) -> Result<Vec<Outfit>, RepositoryError>;

    /// Insert an outfit, assigning it a fresh id. All other fields are
    /// preserved as given.
    async fn insert(&self, outfit: &Outfit) -> Result<Outfit, RepositoryError>;

    /// Remove a saved outfit by id. Absent ids are a silent no-op.
    async fn delete(&self, id: &str) -> Result<(), RepositoryError>;

    /// Flip the favorite flag of a saved outfit in place.
    ///
    /// Returns the updated outfit, or `Err(RepositoryError::NotFound)`
    /// without mutating storage when the id is absent.
    async fn toggle_favorite(&self, id: &str) -> Result<Outfit, RepositoryError>;
}

//! Persistence port for the live selection sequence.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::ClothingItem;

/// Best-effort persistence for the selection sequence.
///
/// The in-memory selection held by `SelectionStore` is the source of truth;
/// this port only mirrors it. Reads therefore never fail outward - a
/// corrupt or missing payload loads as an empty selection - while write
/// failures are reported so the store can log them.
#[async_trait]
pub trait SelectionStateRepository: Send + Sync {
    /// Load the persisted selection, falling back to empty on any failure.
    async fn load(&self) -> Vec<ClothingItem>;

    /// Persist the selection sequence.
    async fn save(&self, items: &[ClothingItem]) -> Result<(), RepositoryError>;

    /// Erase the persisted selection.
    async fn clear(&self) -> Result<(), RepositoryError>;
}

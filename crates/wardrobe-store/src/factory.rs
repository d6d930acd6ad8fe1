//! Composition utilities for wiring JSON-file repositories.
//!
//! Focused purely on construction; no domain logic lives here.

use std::sync::Arc;

use wardrobe_core::Repos;

use crate::id::IdGenerator;
use crate::repositories::{
    JsonOutfitRepository, JsonSelectionStateRepository, JsonTokenRepository,
    JsonWardrobeRepository,
};
use crate::storage::JsonStorage;

/// Factory for creating repository instances backed by [`JsonStorage`].
pub struct StoreFactory;

impl StoreFactory {
    /// Build all repositories over a shared storage directory.
    ///
    /// The wardrobe and outfit repositories share one id generator, so
    /// assigned ids never collide across the two lists.
    pub fn build_repos(storage: &JsonStorage) -> Repos {
        let ids = Arc::new(IdGenerator::new());
        Repos::new(
            Arc::new(JsonWardrobeRepository::new(storage.clone(), ids.clone())),
            Arc::new(JsonOutfitRepository::new(storage.clone(), ids)),
            Arc::new(JsonSelectionStateRepository::new(storage.clone())),
            Arc::new(JsonTokenRepository::new(storage.clone())),
        )
    }
}

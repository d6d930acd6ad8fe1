//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No storage or HTTP types in any signature
//! - Repository traits are minimal and CRUD-focused
//! - Catalogue merging, filtering, and selection logic live in services

pub mod event_emitter;
pub mod image_generator;
pub mod outfit_repository;
pub mod selection_state;
pub mod token_repository;
pub mod wardrobe_repository;

use std::sync::Arc;
use thiserror::Error;

pub use event_emitter::{ChannelEmitter, NoopEmitter, WardrobeEventEmitter};
pub use image_generator::{ContentPart, GeneratedImage, ImageGeneratorPort};
pub use outfit_repository::OutfitRepository;
pub use selection_state::SelectionStateRepository;
pub use token_repository::TokenRepository;
pub use wardrobe_repository::WardrobeRepository;

/// Container for all repository trait objects.
///
/// This struct provides a consistent way to wire repositories across
/// adapters without coupling them to concrete implementations.
#[derive(Clone)]
pub struct Repos {
    /// Repository for user-added clothing items.
    pub wardrobe: Arc<dyn WardrobeRepository>,
    /// Repository for saved outfits.
    pub outfits: Arc<dyn OutfitRepository>,
    /// Repository for the persisted selection sequence.
    pub selection: Arc<dyn SelectionStateRepository>,
    /// Repository for the stored API token.
    pub token: Arc<dyn TokenRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(
        wardrobe: Arc<dyn WardrobeRepository>,
        outfits: Arc<dyn OutfitRepository>,
        selection: Arc<dyn SelectionStateRepository>,
        token: Arc<dyn TokenRepository>,
    ) -> Self {
        Self {
            wardrobe,
            outfits,
            selection,
            token,
        }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details and
/// provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (filesystem, quota, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Core error type for semantic domain errors.
///
/// This is the canonical error type used across the core domain. Adapters
/// map it to their own surface (CLI exit messages, HTTP statuses).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Validation error (invalid input). Raised before any side effect.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error (missing token, bad endpoint).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// External service error (generation API).
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Internal error (unexpected condition).
    #[error("Internal error: {0}")]
    Internal(String),
}

//! Core domain, ports, and services for the virtual wardrobe.
//!
//! This crate is adapter-free: storage and image generation live behind
//! the traits in [`ports`], and the services here only depend on those
//! traits. Concrete adapters (JSON storage, the Gemini client, the CLI)
//! live in their own crates.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod events;
pub mod ports;
pub mod services;
pub mod utils;

// Re-export commonly used types for convenience
pub use domain::{
    ClothingFilter, ClothingItem, ClothingType, Outfit, PriceRange, CURRENT_SELECTION_ID,
    is_seed_id, seed_catalog,
};
pub use events::{ItemSummary, WardrobeEvent};
pub use ports::{
    ChannelEmitter, ContentPart, CoreError, GeneratedImage, ImageGeneratorPort, NoopEmitter,
    OutfitRepository, Repos, RepositoryError, SelectionStateRepository, TokenRepository,
    WardrobeEventEmitter, WardrobeRepository,
};
pub use services::{SelectionStore, WardrobeService};
pub use utils::validation::{is_valid_image_url, validate_item, validate_outfit};

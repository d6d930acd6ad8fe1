//! JSON-file storage adapters for the virtual wardrobe.
//!
//! Persists each storage key as a `<key>.json` file in a single
//! directory, byte-compatible with the legacy web client's
//! local-storage payloads.

#![deny(unsafe_code)]

pub mod factory;
pub mod id;
pub mod repositories;
pub mod storage;

// Re-export factory for convenient access
pub use factory::StoreFactory;

pub use id::IdGenerator;
pub use storage::{JsonStorage, SimulatedLatency};

// Re-export repository implementations
pub use repositories::{
    JsonOutfitRepository, JsonSelectionStateRepository, JsonTokenRepository,
    JsonWardrobeRepository,
};

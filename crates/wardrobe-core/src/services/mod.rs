//! Business logic services.

pub mod selection_store;
pub mod wardrobe_service;

pub use selection_store::SelectionStore;
pub use wardrobe_service::WardrobeService;

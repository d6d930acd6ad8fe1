//! JSON-file implementations of the core repository ports.

pub mod json_outfit_repository;
pub mod json_selection_repository;
pub mod json_token_repository;
pub mod json_wardrobe_repository;

pub use json_outfit_repository::JsonOutfitRepository;
pub use json_selection_repository::JsonSelectionStateRepository;
pub use json_token_repository::JsonTokenRepository;
pub use json_wardrobe_repository::JsonWardrobeRepository;

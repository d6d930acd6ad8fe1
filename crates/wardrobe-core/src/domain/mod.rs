//! Domain types for the virtual wardrobe.
//!
//! Everything here is independent of storage, HTTP, and UI concerns.

mod catalog;
mod clothing;
mod outfit;

pub use catalog::{is_seed_id, seed_catalog};
pub use clothing::{ClothingFilter, ClothingItem, ClothingType, PriceRange};
pub use outfit::{Outfit, CURRENT_SELECTION_ID};

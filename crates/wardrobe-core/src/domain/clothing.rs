//! Clothing domain types.
//!
//! These types represent garments in the wardrobe, independent of any
//! infrastructure concerns (storage, HTTP, etc.). Field names serialize in
//! camelCase so persisted data stays compatible with the legacy web
//! client's storage format.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of garment categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClothingType {
    Shirt,
    Pants,
    Shoes,
    Dress,
    Jacket,
    Skirt,
    Shorts,
    Sweater,
    Accessory,
    Hat,
    Bag,
}

impl ClothingType {
    /// All categories, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::Shirt,
        Self::Pants,
        Self::Shoes,
        Self::Dress,
        Self::Jacket,
        Self::Skirt,
        Self::Shorts,
        Self::Sweater,
        Self::Accessory,
        Self::Hat,
        Self::Bag,
    ];

    /// Lowercase wire name of the category (matches the serde encoding).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shirt => "shirt",
            Self::Pants => "pants",
            Self::Shoes => "shoes",
            Self::Dress => "dress",
            Self::Jacket => "jacket",
            Self::Skirt => "skirt",
            Self::Shorts => "shorts",
            Self::Sweater => "sweater",
            Self::Accessory => "accessory",
            Self::Hat => "hat",
            Self::Bag => "bag",
        }
    }
}

impl fmt::Display for ClothingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ClothingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s.to_lowercase())
            .ok_or_else(|| format!("unknown clothing type: {s}"))
    }
}

/// A single garment in the wardrobe.
///
/// Identity is the `id` field. Items from the seed catalogue carry the fixed
/// ids `"1"`..`"16"`; persisted items receive a time-derived id assigned by
/// the repository on insert (any caller-supplied id is discarded there).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingItem {
    /// Unique identifier of the garment.
    pub id: String,
    /// Human-readable name (e.g., "Camisa Blanca Formal").
    pub name: String,
    /// Garment category.
    #[serde(rename = "type")]
    pub kind: ClothingType,
    /// Free-form color description (e.g., "azul oscuro").
    pub color: String,
    /// Brand, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// URL of the garment photo.
    pub image_url: String,
    /// Optional longer description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// User-defined tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Price, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// URL of the page the garment was detected on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

impl ClothingItem {
    /// Create an item with the minimal required fields.
    ///
    /// Optional fields are set to `None`.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: ClothingType,
        color: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            color: color.into(),
            brand: None,
            image_url: image_url.into(),
            description: None,
            tags: None,
            price: None,
            source_url: None,
        }
    }

    /// One-line Spanish description used in generation prompts:
    /// `"{name} ({type}) de color {color}[ marca {brand}]"`.
    #[must_use]
    pub fn prompt_description(&self) -> String {
        match &self.brand {
            Some(brand) => format!(
                "{} ({}) de color {} marca {}",
                self.name, self.kind, self.color, brand
            ),
            None => format!("{} ({}) de color {}", self.name, self.kind, self.color),
        }
    }
}

/// A price range for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// Criteria for filtering the catalogue. All fields are optional and
/// combined conjunctively.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingFilter {
    /// Exact category match.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ClothingType>,
    /// Case-insensitive substring match on color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Case-insensitive substring match on brand. An item without a brand
    /// never matches when this is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Inclusive price range. An item without a price never matches when
    /// this is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,
}

impl ClothingFilter {
    /// Whether an item satisfies every criterion in this filter.
    #[must_use]
    pub fn matches(&self, item: &ClothingItem) -> bool {
        if let Some(kind) = self.kind {
            if item.kind != kind {
                return false;
            }
        }
        if let Some(ref color) = self.color {
            if !item.color.to_lowercase().contains(&color.to_lowercase()) {
                return false;
            }
        }
        if let Some(ref brand) = self.brand {
            match &item.brand {
                Some(b) if b.to_lowercase().contains(&brand.to_lowercase()) => {}
                _ => return false,
            }
        }
        if let Some(range) = self.price_range {
            match item.price {
                Some(p) if p >= range.min && p <= range.max => {}
                _ => return false,
            }
        }
        true
    }
}

//! Input validation helpers.
//!
//! Validation failures abort an operation before any side effect; the
//! messages are meant for direct display.

use crate::domain::{ClothingItem, Outfit};
use crate::ports::CoreError;

/// Whether a URL is acceptable for an image reference.
///
/// Accepts http(s) URLs and data URIs (remote photos and file-upload
/// data URLs).
#[must_use]
pub fn is_valid_image_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://") || url.starts_with("data:image/")
}

/// Validate a clothing item before saving.
pub fn validate_item(item: &ClothingItem) -> Result<(), CoreError> {
    if item.name.trim().is_empty() {
        return Err(CoreError::Validation("item name must not be empty".to_string()));
    }
    if item.color.trim().is_empty() {
        return Err(CoreError::Validation("item color must not be empty".to_string()));
    }
    if !is_valid_image_url(&item.image_url) {
        return Err(CoreError::Validation(format!(
            "malformed image URL: {}",
            item.image_url
        )));
    }
    Ok(())
}

/// Validate an outfit before saving.
pub fn validate_outfit(outfit: &Outfit) -> Result<(), CoreError> {
    if outfit.name.trim().is_empty() {
        return Err(CoreError::Validation(
            "outfit name must not be empty".to_string(),
        ));
    }
    if outfit.items.is_empty() {
        return Err(CoreError::Validation(
            "outfit must contain at least one item".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ClothingType;

    #[test]
    fn test_image_url_schemes() {
        assert!(is_valid_image_url("https://example.com/a.png"));
        assert!(is_valid_image_url("http://example.com/a.jpg"));
        assert!(is_valid_image_url("data:image/png;base64,iVBORw0KGgo="));
        assert!(!is_valid_image_url("ftp://example.com/a.png"));
        assert!(!is_valid_image_url("not a url"));
    }

    #[test]
    fn test_validate_item_rejects_empty_name() {
        let item = ClothingItem::new("x", "  ", ClothingType::Hat, "rojo", "https://e.com/a.png");
        assert!(matches!(
            validate_item(&item),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_item_accepts_complete_item() {
        let item = ClothingItem::new("x", "Gorra", ClothingType::Hat, "rojo", "https://e.com/a.png");
        assert!(validate_item(&item).is_ok());
    }

    #[test]
    fn test_validate_outfit_requires_items() {
        let outfit = Outfit {
            id: String::new(),
            name: "Look".to_string(),
            items: vec![],
            image_url: None,
            created_at: chrono::Utc::now(),
            is_favorite: false,
            description: None,
        };
        assert!(validate_outfit(&outfit).is_err());
    }
}

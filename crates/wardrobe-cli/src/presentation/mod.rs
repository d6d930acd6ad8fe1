//! Shared CLI presentation utilities.
//!
//! This module provides reusable display and formatting functions
//! for consistent CLI output across commands. Keep it format-only:
//! domain transforms belong in core services.

use wardrobe_core::{ClothingItem, Outfit};

/// Truncate a string to `max_len`, appending "..." when cut.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}

/// Print a separator line of the given width.
pub fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

/// Format an optional string for table output.
pub fn format_optional(value: Option<&str>) -> &str {
    value.unwrap_or("--")
}

/// Print the header row of the clothing table.
pub fn print_item_header() {
    println!(
        "{:<15} {:<28} {:<10} {:<15} {:<12} Price",
        "ID", "Name", "Type", "Color", "Brand"
    );
    print_separator(90);
}

/// Print one clothing item as a table row.
pub fn print_item_row(item: &ClothingItem) {
    let price = item
        .price
        .map(|p| format!("{p:.2}"))
        .unwrap_or_else(|| "--".to_string());
    println!(
        "{:<15} {:<28} {:<10} {:<15} {:<12} {}",
        truncate_string(&item.id, 14),
        truncate_string(&item.name, 27),
        item.kind,
        truncate_string(&item.color, 14),
        truncate_string(format_optional(item.brand.as_deref()), 11),
        price
    );
}

/// Print one outfit with its item list.
pub fn print_outfit(outfit: &Outfit) {
    let favorite = if outfit.is_favorite { " ★" } else { "" };
    println!(
        "{} - {}{} ({} items, created {})",
        outfit.id,
        outfit.name,
        favorite,
        outfit.items.len(),
        outfit.created_at.format("%Y-%m-%d %H:%M")
    );
    if let Some(description) = &outfit.description {
        println!("    {description}");
    }
    for item in &outfit.items {
        println!("    - {} ({})", item.name, item.kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string_no_truncation_needed() {
        assert_eq!(truncate_string("short", 10), "short");
    }

    #[test]
    fn test_truncate_string_needs_truncation() {
        assert_eq!(truncate_string("this is a very long string", 10), "this is...");
    }

    #[test]
    fn test_format_optional() {
        assert_eq!(format_optional(Some("Zara")), "Zara");
        assert_eq!(format_optional(None), "--");
    }
}

//! Filter command handler.

use anyhow::{bail, Result};

use wardrobe_core::{ClothingFilter, ClothingType, PriceRange};

use crate::bootstrap::CliContext;
use crate::presentation::{print_item_header, print_item_row};

/// Execute the filter command.
pub async fn execute(
    ctx: &CliContext,
    kind: Option<ClothingType>,
    color: Option<String>,
    brand: Option<String>,
    min_price: Option<f64>,
    max_price: Option<f64>,
) -> Result<()> {
    let price_range = match (min_price, max_price) {
        (Some(min), Some(max)) => Some(PriceRange { min, max }),
        (None, None) => None,
        _ => bail!("--min-price and --max-price must be given together"),
    };

    let filter = ClothingFilter {
        kind,
        color,
        brand,
        price_range,
    };
    let matches = ctx.wardrobe.filter_clothes(&filter).await;

    if matches.is_empty() {
        println!("No items match the given filter.");
        return Ok(());
    }

    println!("{} matching item(s):\n", matches.len());
    print_item_header();
    for item in &matches {
        print_item_row(item);
    }

    Ok(())
}

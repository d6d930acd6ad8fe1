//! Add command handler.

use anyhow::Result;

use wardrobe_core::{ClothingItem, ClothingType};

use crate::bootstrap::CliContext;

/// Arguments for the add command.
pub struct AddArgs {
    pub name: String,
    pub kind: ClothingType,
    pub color: String,
    pub image_url: String,
    pub brand: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub source_url: Option<String>,
}

/// Execute the add command.
///
/// The repository assigns the definitive id; whatever we pass here is
/// discarded on insert.
pub async fn execute(ctx: &CliContext, args: AddArgs) -> Result<()> {
    let mut item = ClothingItem::new("", &args.name, args.kind, &args.color, &args.image_url);
    item.brand = args.brand;
    item.description = args.description;
    item.price = args.price;
    item.source_url = args.source_url;

    let stored = ctx.wardrobe.save_item(&item).await?;
    println!("Added '{}' with id {}", stored.name, stored.id);
    Ok(())
}

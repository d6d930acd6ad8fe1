//! Update command handler.

use anyhow::{bail, Result};

use wardrobe_core::{is_seed_id, ClothingType, CoreError, RepositoryError};

use crate::bootstrap::CliContext;

/// Arguments for the update command.
pub struct UpdateArgs {
    pub id: String,
    pub name: Option<String>,
    pub kind: Option<ClothingType>,
    pub color: Option<String>,
    pub image_url: Option<String>,
    pub brand: Option<String>,
    pub price: Option<f64>,
}

/// Execute the update command.
///
/// Only user-added items can be updated; the persisted list never
/// contains seed items.
pub async fn execute(ctx: &CliContext, args: UpdateArgs) -> Result<()> {
    if is_seed_id(&args.id) {
        bail!("item {} is part of the built-in catalogue and cannot be updated", args.id);
    }

    let Some(mut item) = ctx
        .wardrobe
        .my_clothes()
        .await
        .into_iter()
        .find(|i| i.id == args.id)
    else {
        bail!("no item with id {}", args.id);
    };

    if let Some(name) = args.name {
        item.name = name;
    }
    if let Some(kind) = args.kind {
        item.kind = kind;
    }
    if let Some(color) = args.color {
        item.color = color;
    }
    if let Some(image_url) = args.image_url {
        item.image_url = image_url;
    }
    if let Some(brand) = args.brand {
        item.brand = Some(brand);
    }
    if let Some(price) = args.price {
        item.price = Some(price);
    }

    match ctx.wardrobe.update_item(&item).await {
        Ok(updated) => {
            println!("Updated '{}' ({})", updated.name, updated.id);
            Ok(())
        }
        Err(CoreError::Repository(RepositoryError::NotFound(_))) => {
            bail!("no persisted item with id {}", args.id)
        }
        Err(e) => Err(e.into()),
    }
}

//! Outfit command handlers.

use anyhow::{bail, Result};
use chrono::Utc;

use wardrobe_core::{CoreError, Outfit, RepositoryError};

use crate::bootstrap::CliContext;
use crate::commands::OutfitCommand;
use crate::presentation::print_outfit;

/// Execute an outfit subcommand.
pub async fn execute(ctx: &CliContext, command: OutfitCommand) -> Result<()> {
    match command {
        OutfitCommand::Save { name, description } => {
            let items = ctx.selection.selected_items();
            if items.is_empty() {
                bail!("select at least one item before saving an outfit");
            }

            let outfit = Outfit {
                id: String::new(),
                name,
                items,
                image_url: None,
                created_at: Utc::now(),
                is_favorite: false,
                description,
            };
            let stored = ctx.wardrobe.save_outfit(&outfit).await?;
            println!("Saved outfit '{}' with id {}", stored.name, stored.id);
        }
        OutfitCommand::List => {
            let outfits = ctx.wardrobe.saved_outfits().await;
            if outfits.is_empty() {
                println!("No saved outfits yet.");
                return Ok(());
            }

            println!("{} saved outfit(s):\n", outfits.len());
            for outfit in &outfits {
                print_outfit(outfit);
                println!();
            }
        }
        OutfitCommand::Delete { id } => {
            ctx.wardrobe.delete_outfit(&id).await?;
            println!("Deleted outfit {id} (if it existed).");
        }
        OutfitCommand::Favorite { id } => match ctx.wardrobe.toggle_favorite(&id).await {
            Ok(outfit) => {
                let state = if outfit.is_favorite {
                    "now a favorite"
                } else {
                    "no longer a favorite"
                };
                println!("'{}' is {state}.", outfit.name);
            }
            Err(CoreError::Repository(RepositoryError::NotFound(_))) => {
                bail!("no saved outfit with id {id}")
            }
            Err(e) => return Err(e.into()),
        },
    }

    Ok(())
}

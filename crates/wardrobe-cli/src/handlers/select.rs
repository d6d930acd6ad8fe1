//! Selection command handlers.

use anyhow::{bail, Result};

use crate::bootstrap::CliContext;
use crate::commands::SelectCommand;
use crate::presentation::print_item_row;

/// Execute a selection subcommand.
pub async fn execute(ctx: &CliContext, command: SelectCommand) -> Result<()> {
    match command {
        SelectCommand::Add { id } => {
            let Some(item) = ctx
                .wardrobe
                .my_clothes()
                .await
                .into_iter()
                .find(|i| i.id == id)
            else {
                bail!("no item with id {id}");
            };

            if ctx.selection.is_item_selected(&id) {
                println!("'{}' is already selected.", item.name);
                return Ok(());
            }

            let name = item.name.clone();
            ctx.selection.add_item(item).await;
            println!(
                "Selected '{}' ({} item(s) selected).",
                name,
                ctx.selection.selection_count()
            );
        }
        SelectCommand::Remove { id } => {
            ctx.selection.remove_item(&id).await;
            println!(
                "{} item(s) remain selected.",
                ctx.selection.selection_count()
            );
        }
        SelectCommand::Clear => {
            ctx.selection.clear_selection().await;
            println!("Selection cleared.");
        }
        SelectCommand::Show => {
            let items = ctx.selection.selected_items();
            if items.is_empty() {
                println!("Nothing is selected.");
                return Ok(());
            }

            println!("{} selected item(s):", items.len());
            for item in &items {
                print_item_row(item);
            }

            if let Some(outfit) = ctx.selection.current_outfit() {
                println!("\nDerived outfit: {}", outfit.name);
            }
        }
    }

    Ok(())
}

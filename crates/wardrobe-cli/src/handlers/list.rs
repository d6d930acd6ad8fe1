//! List command handler.
//!
//! Displays the full catalogue (seed items plus user additions) in a
//! formatted table.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::{print_item_header, print_item_row};

/// Execute the list command.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let items = ctx.wardrobe.my_clothes().await;

    println!("Found {} item(s) in the wardrobe:\n", items.len());
    print_item_header();
    for item in &items {
        print_item_row(item);
    }

    Ok(())
}

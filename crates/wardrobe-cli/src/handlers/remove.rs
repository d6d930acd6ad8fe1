//! Remove command handler.

use anyhow::Result;

use wardrobe_core::is_seed_id;

use crate::bootstrap::CliContext;

/// Execute the remove command.
///
/// Removal filters the persisted list, so seed ids and unknown ids are a
/// silent no-op; warn up front for the seed case.
pub async fn execute(ctx: &CliContext, id: &str) -> Result<()> {
    if is_seed_id(id) {
        println!("Item {id} is part of the built-in catalogue and cannot be removed.");
        return Ok(());
    }

    ctx.wardrobe.delete_item(id).await?;
    println!("Removed item {id} (if it existed).");
    Ok(())
}

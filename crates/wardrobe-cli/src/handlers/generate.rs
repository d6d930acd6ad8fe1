//! Generate command handler.
//!
//! Renders the current selection on a base photo via the Gemini image
//! model and writes the result to disk.

use std::sync::Arc;

use anyhow::{bail, Context, Result};

use wardrobe_core::ImageGeneratorPort;
use wardrobe_gemini::{GeminiClient, GeminiConfig, PromptBuilder, ReqwestImageFetcher};

use crate::bootstrap::CliContext;

/// Execute the generate command.
pub async fn execute(
    ctx: &CliContext,
    base_image: &str,
    output: &str,
    token: Option<&str>,
) -> Result<()> {
    let items = ctx.selection.selected_items();
    if items.is_empty() {
        bail!("select at least one item before generating an image");
    }

    let Some(token) = ctx.resolve_token(token).await else {
        bail!("no API token configured; use 'wardrobe token set <token>' or set GEMINI_API_KEY");
    };

    tracing::debug!(items = items.len(), output, "generating outfit image");

    let config = GeminiConfig::new().with_api_key(token);
    let fetcher = ReqwestImageFetcher::new(config.timeout())?;
    let builder = PromptBuilder::new(Arc::new(fetcher));
    let client = GeminiClient::new(config)?;

    println!(
        "Rendering {} garment(s) on the base photo...",
        items.len()
    );
    let parts = builder.outfit_parts(base_image, &items).await;
    let Some(image) = client.generate(parts).await? else {
        println!("The model returned no image this time; try again or adjust the selection.");
        return Ok(());
    };

    std::fs::write(output, &image.bytes)
        .with_context(|| format!("failed to write {output}"))?;
    println!(
        "Wrote {} bytes ({}) to {output}",
        image.bytes.len(),
        image.mime_type
    );
    Ok(())
}

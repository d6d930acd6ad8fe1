//! Token command handlers.

use anyhow::{bail, Result};

use wardrobe_gemini::{is_plausible_token, GeminiClient, GeminiConfig, MIN_TOKEN_LEN};

use crate::bootstrap::CliContext;
use crate::commands::TokenCommand;

/// Execute a token subcommand.
pub async fn execute(ctx: &CliContext, command: TokenCommand) -> Result<()> {
    match command {
        TokenCommand::Set { token } => {
            if !is_plausible_token(&token) {
                bail!("token must be at least {MIN_TOKEN_LEN} characters");
            }
            ctx.repos.token.save(&token).await?;
            println!("Token stored.");
        }
        TokenCommand::Status => {
            let Some(token) = ctx.resolve_token(None).await else {
                println!("No token configured.");
                return Ok(());
            };

            let client = GeminiClient::new(GeminiConfig::new())?;
            if client.validate_token(&token).await {
                println!("Token is valid.");
            } else {
                println!("Token was rejected by the API.");
            }
        }
    }

    Ok(())
}

//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. All concrete implementations are instantiated
//! here: JSON storage and repositories (via wardrobe-store), core
//! services (via wardrobe-core), and the Gemini client (via
//! wardrobe-gemini). Command handlers receive the fully-composed context
//! and delegate work to it.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use wardrobe_core::{NoopEmitter, Repos, SelectionStore, WardrobeService};
use wardrobe_store::{JsonStorage, StoreFactory};

/// Environment variable that takes precedence over the stored token.
pub const TOKEN_ENV_VAR: &str = "GEMINI_API_KEY";

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Directory holding the JSON storage files.
    pub data_dir: PathBuf,
}

impl CliConfig {
    /// Create config with the platform-default storage directory.
    pub fn with_defaults() -> Result<Self> {
        let data_dir =
            JsonStorage::default_dir().context("could not determine a data directory")?;
        Ok(Self { data_dir })
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// Catalogue and outfit operations.
    pub wardrobe: WardrobeService,
    /// The reactive selection store.
    pub selection: SelectionStore,
    /// Raw repositories, for the token handler.
    pub repos: Repos,
}

impl CliContext {
    /// Resolve the API token: explicit flag, then environment, then the
    /// stored value.
    pub async fn resolve_token(&self, flag: Option<&str>) -> Option<String> {
        if let Some(token) = flag {
            return Some(token.to_string());
        }
        if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
            if !token.trim().is_empty() {
                return Some(token);
            }
        }
        self.repos.token.load().await.ok().flatten()
    }
}

/// Bootstrap the CLI application.
///
/// This is the composition root. It builds the JSON storage, wires the
/// repositories, and assembles the services. The CLI uses `NoopEmitter`
/// since there is no frontend to broadcast events to.
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    tracing::debug!("using data dir: {}", config.data_dir.display());
    let storage = JsonStorage::new(config.data_dir);
    let repos = StoreFactory::build_repos(&storage);

    let emitter = Arc::new(NoopEmitter);
    let wardrobe = WardrobeService::new(
        repos.wardrobe.clone(),
        repos.outfits.clone(),
        emitter.clone(),
    );
    let selection = SelectionStore::new(repos.selection.clone(), emitter).await;

    Ok(CliContext {
        wardrobe,
        selection,
        repos,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_bootstrap_wires_a_working_context() {
        let dir = TempDir::new().unwrap();
        let ctx = bootstrap(CliConfig {
            data_dir: dir.path().to_path_buf(),
        })
        .await
        .unwrap();

        assert_eq!(ctx.wardrobe.my_clothes().await.len(), 16);
        assert_eq!(ctx.selection.selection_count(), 0);
    }
}

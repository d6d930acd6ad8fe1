//! JSON-file implementation of the `TokenRepository` trait.

use async_trait::async_trait;

use wardrobe_core::{RepositoryError, TokenRepository};

use crate::storage::JsonStorage;

const TOKEN_KEY: &str = "gemini_token";

/// Stores the generation API token under the `gemini_token` key.
pub struct JsonTokenRepository {
    storage: JsonStorage,
}

impl JsonTokenRepository {
    /// Create a new token repository over the given storage.
    pub fn new(storage: JsonStorage) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl TokenRepository for JsonTokenRepository {
    async fn load(&self) -> Result<Option<String>, RepositoryError> {
        self.storage.read_key(TOKEN_KEY).await
    }

    async fn save(&self, token: &str) -> Result<(), RepositoryError> {
        self.storage.write_key(TOKEN_KEY, &token).await
    }
}

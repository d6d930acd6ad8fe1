//! Persistence port for the generation API token.

use async_trait::async_trait;

use super::RepositoryError;

/// Storage for the user-supplied generation API token.
///
/// A build/run-time environment key takes precedence over this stored
/// value; resolution order is the caller's concern.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Load the stored token, if any.
    async fn load(&self) -> Result<Option<String>, RepositoryError>;

    /// Store a token, replacing any previous value.
    async fn save(&self, token: &str) -> Result<(), RepositoryError>;
}

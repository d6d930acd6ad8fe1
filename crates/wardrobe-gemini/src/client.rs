//! The Gemini client, implementing the core image-generation port.

use std::sync::Arc;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use tracing::{debug, info};
use url::Url;

use wardrobe_core::{ContentPart, CoreError, GeneratedImage, ImageGeneratorPort};

use crate::config::{is_plausible_token, GeminiConfig};
use crate::error::{GeminiError, GeminiResult};
use crate::http::{post_typed, HttpBackend, ReqwestBackend};
use crate::wire::{GenerateContentRequest, GenerateContentResponse};

/// Client for the Gemini `generateContent` endpoint.
///
/// Each request is sent exactly once; callers decide whether and when to
/// try again.
pub struct GeminiClient {
    config: GeminiConfig,
    backend: Arc<dyn HttpBackend>,
}

impl GeminiClient {
    /// Create a client with the production reqwest backend.
    pub fn new(config: GeminiConfig) -> GeminiResult<Self> {
        let backend = Arc::new(ReqwestBackend::new(&config)?);
        Ok(Self { config, backend })
    }

    /// Create a client over a custom HTTP backend.
    pub fn with_backend(config: GeminiConfig, backend: Arc<dyn HttpBackend>) -> Self {
        Self { config, backend }
    }

    fn api_key(&self) -> GeminiResult<&str> {
        let key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GeminiError::MissingToken)?;
        if !is_plausible_token(key) {
            return Err(GeminiError::InvalidToken);
        }
        Ok(key)
    }

    fn generate_url(&self) -> GeminiResult<Url> {
        let key = self.api_key()?;
        let mut url = Url::parse(&format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        ))?;
        url.query_pairs_mut().append_pair("key", key);
        Ok(url)
    }

    /// Check a token against the models listing endpoint.
    ///
    /// Implausibly short tokens are rejected without a request; network
    /// failures read as invalid rather than erroring out.
    pub async fn validate_token(&self, token: &str) -> bool {
        if !is_plausible_token(token) {
            return false;
        }
        let url = format!(
            "{}/models?key={token}",
            self.config.base_url.trim_end_matches('/')
        );
        let Ok(url) = Url::parse(&url) else {
            return false;
        };
        match self.backend.get_status(&url).await {
            Ok(status) => (200..300).contains(&status),
            Err(_) => false,
        }
    }
}

#[async_trait]
impl ImageGeneratorPort for GeminiClient {
    async fn generate(&self, parts: Vec<ContentPart>) -> Result<Option<GeneratedImage>, CoreError> {
        let url = self.generate_url()?;
        let request = GenerateContentRequest::from_parts(parts);

        debug!(model = %self.config.model, "sending generateContent request");
        let response: GenerateContentResponse =
            post_typed(self.backend.as_ref(), &url, &request)
                .await
                .map_err(CoreError::from)?;

        let Some(blob) = response.first_inline_blob() else {
            // The API answered with text only; surface it as "no image".
            info!("generateContent response carried no inline image");
            return Ok(None);
        };

        let bytes = BASE64.decode(blob.data.as_bytes()).map_err(|e| {
            CoreError::from(GeminiError::InvalidResponse {
                message: format!("inline image is not valid base64: {e}"),
            })
        })?;

        Ok(Some(GeneratedImage {
            mime_type: blob.mime_type.unwrap_or_else(|| "image/png".to_string()),
            bytes,
        }))
    }
}

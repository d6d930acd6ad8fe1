//! Image generation port and its request/response shapes.
//!
//! Prompt parts are explicit tagged variants rather than untyped JSON, so
//! malformed parts cannot reach the wire.

use async_trait::async_trait;

use super::CoreError;

/// One unit of a multi-modal generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentPart {
    /// Literal instruction text.
    Text(String),
    /// Base64-encoded inline image data.
    InlineImage {
        /// Mime type of the encoded image (e.g., "image/png").
        mime_type: String,
        /// Base64 payload.
        data: String,
    },
}

impl ContentPart {
    /// Convenience constructor for a text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Convenience constructor for an inline image part.
    pub fn inline_image(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self::InlineImage {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }
}

/// A decoded image returned by the generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    /// Mime type reported by the service ("image/png" when unspecified).
    pub mime_type: String,
    /// Raw image bytes, base64-decoded from the response part.
    pub bytes: Vec<u8>,
}

/// Port for the external generative-image service.
///
/// Implementations send the ordered parts as a single request and scan the
/// response for the first inline-image part. A response without one yields
/// `Ok(None)` rather than an error; callers decide how to surface the
/// missing image.
#[async_trait]
pub trait ImageGeneratorPort: Send + Sync {
    /// Send a multi-part prompt and decode the first returned inline image.
    async fn generate(&self, parts: Vec<ContentPart>) -> Result<Option<GeneratedImage>, CoreError>;
}

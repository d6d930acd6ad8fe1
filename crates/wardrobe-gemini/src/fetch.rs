//! Fetching and encoding of referenced images.
//!
//! Garment and base photos are referenced by URL (remote or data URI) and
//! must be inlined as base64 before being sent to the API.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::error::{GeminiError, GeminiResult};

/// Fetches raw image bytes for a URL.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    /// Fetch the bytes behind an image URL.
    async fn fetch(&self, url: &str) -> GeminiResult<Vec<u8>>;
}

/// Production fetcher using reqwest.
pub struct ReqwestImageFetcher {
    client: reqwest::Client,
}

impl ReqwestImageFetcher {
    /// Create a new image fetcher with the given request timeout.
    pub fn new(timeout: std::time::Duration) -> GeminiResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ImageFetcher for ReqwestImageFetcher {
    async fn fetch(&self, url: &str) -> GeminiResult<Vec<u8>> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GeminiError::ImageFetch {
                url: url.to_string(),
                message: format!("HTTP {status}"),
            });
        }
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

/// An image ready to be inlined into a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    /// Sniffed mime type.
    pub mime_type: String,
    /// Base64-encoded bytes.
    pub data: String,
}

/// Resolve a URL to an encoded inline image.
///
/// Data URIs are decoded locally; anything else goes through the fetcher.
pub async fn encode_image_url(
    fetcher: &dyn ImageFetcher,
    url: &str,
) -> GeminiResult<EncodedImage> {
    if let Some(encoded) = decode_data_uri(url) {
        return encoded;
    }
    let bytes = fetcher.fetch(url).await?;
    Ok(EncodedImage {
        mime_type: sniff_mime(&bytes).to_string(),
        data: BASE64.encode(&bytes),
    })
}

/// Parse a `data:image/...;base64,...` URI.
///
/// Returns `None` for non-data URLs, `Some(Err)` for malformed data URIs.
fn decode_data_uri(url: &str) -> Option<GeminiResult<EncodedImage>> {
    let rest = url.strip_prefix("data:")?;
    let malformed = || GeminiError::ImageFetch {
        url: url.chars().take(64).collect(),
        message: "malformed data URI".to_string(),
    };

    let Some((header, data)) = rest.split_once(',') else {
        return Some(Err(malformed()));
    };
    let Some(mime_type) = header.strip_suffix(";base64") else {
        return Some(Err(malformed()));
    };
    // Validate the payload by round-tripping it through the decoder.
    match BASE64.decode(data.as_bytes()) {
        Ok(_) => Some(Ok(EncodedImage {
            mime_type: mime_type.to_string(),
            data: data.to_string(),
        })),
        Err(_) => Some(Err(malformed())),
    }
}

/// Determine the mime type from the image's magic bytes.
///
/// Unknown formats default to `image/png`, the type the legacy web client
/// stamped on every inline part.
fn sniff_mime(bytes: &[u8]) -> &'static str {
    match bytes {
        [0x89, b'P', b'N', b'G', ..] => "image/png",
        [0xFF, 0xD8, 0xFF, ..] => "image/jpeg",
        [b'G', b'I', b'F', b'8', ..] => "image/gif",
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => "image/webp",
        _ => "image/png",
    }
}

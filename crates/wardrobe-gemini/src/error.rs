//! Internal error types for Gemini operations.
//!
//! These errors are internal to `wardrobe-gemini` and are mapped to core
//! errors at the port boundary.

use thiserror::Error;

use wardrobe_core::CoreError;

/// Result type alias for Gemini operations.
pub type GeminiResult<T> = Result<T, GeminiError>;

/// Errors related to the Gemini generateContent API.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// No API token was configured for the client.
    #[error("No Gemini API token configured")]
    MissingToken,

    /// The token was rejected (HTTP 401) or is too short to be real.
    #[error("Gemini API token invalid or expired")]
    InvalidToken,

    /// The API rate limit was hit (HTTP 429).
    #[error("Gemini API rate limit exceeded, try again later")]
    RateLimited,

    /// API request failed with some other HTTP error status.
    #[error("Gemini API request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// API returned an invalid or unexpected response.
    #[error("Invalid response from Gemini API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// An image referenced by the prompt could not be fetched.
    #[error("Failed to fetch image {url}: {message}")]
    ImageFetch {
        /// The image URL
        url: String,
        /// What went wrong
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl From<GeminiError> for CoreError {
    fn from(e: GeminiError) -> Self {
        match e {
            GeminiError::MissingToken => Self::Configuration(e.to_string()),
            other => Self::ExternalService(other.to_string()),
        }
    }
}

/// Map a non-success HTTP status to the matching error.
pub(crate) fn error_for_status(status: u16, url: &str) -> GeminiError {
    match status {
        401 => GeminiError::InvalidToken,
        429 => GeminiError::RateLimited,
        status => GeminiError::ApiRequestFailed {
            status,
            url: url.to_string(),
        },
    }
}

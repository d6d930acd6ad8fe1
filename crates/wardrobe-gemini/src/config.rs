//! Public configuration for the Gemini client.

use std::time::Duration;

/// Minimum plausible token length; anything shorter is rejected before a
/// request is made.
pub const MIN_TOKEN_LEN: usize = 10;

/// Configuration for the Gemini client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use wardrobe_gemini::GeminiConfig;
/// use std::time::Duration;
///
/// let config = GeminiConfig::new()
///     .with_api_key("AIza...")
///     .with_timeout(Duration::from_secs(60));
/// ```
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Base URL for the Gemini API
    pub(crate) base_url: String,
    /// Model invoked by `generateContent`
    pub(crate) model: String,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// API key appended as the `key` query parameter
    pub(crate) api_key: Option<String>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-2.5-flash-image".to_string(),
            timeout: Duration::from_secs(30),
            api_key: None,
        }
    }
}

impl GeminiConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL for the Gemini API.
    ///
    /// Defaults to `https://generativelanguage.googleapis.com/v1beta`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the model invoked by `generateContent`.
    ///
    /// Defaults to `gemini-2.5-flash-image`.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the API key.
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set an optional API key.
    #[must_use]
    pub fn with_optional_api_key(mut self, key: Option<String>) -> Self {
        self.api_key = key;
        self
    }

    /// The configured request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Whether a token is long enough to possibly be real.
#[must_use]
pub fn is_plausible_token(token: &str) -> bool {
    token.trim().len() >= MIN_TOKEN_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeminiConfig::new();
        assert_eq!(
            config.base_url,
            "https://generativelanguage.googleapis.com/v1beta"
        );
        assert_eq!(config.model, "gemini-2.5-flash-image");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GeminiConfig::new()
            .with_base_url("https://custom.api")
            .with_model("gemini-x")
            .with_timeout(Duration::from_secs(60))
            .with_api_key("AIzaSomething");

        assert_eq!(config.base_url, "https://custom.api");
        assert_eq!(config.model, "gemini-x");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.api_key, Some("AIzaSomething".to_string()));
    }

    #[test]
    fn test_token_plausibility() {
        assert!(is_plausible_token("AIzaSyLongEnough"));
        assert!(is_plausible_token("  1234567890  "));
        assert!(!is_plausible_token("short"));
        assert!(!is_plausible_token("         "));
    }
}

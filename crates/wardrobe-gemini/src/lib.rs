//! Gemini `generateContent` client for the virtual wardrobe.
//!
//! Turns a selection of garments plus a base person photo into a
//! multi-part prompt, sends it to the Gemini image model, and decodes the
//! first inline image of the response. Requests are sent exactly once;
//! there is no retry layer.

pub mod client;
pub mod config;
pub mod error;
pub mod fetch;
pub mod http;
pub mod prompt;
pub mod wire;

pub use client::GeminiClient;
pub use config::{is_plausible_token, GeminiConfig, MIN_TOKEN_LEN};
pub use error::{GeminiError, GeminiResult};
pub use fetch::{ImageFetcher, ReqwestImageFetcher};
pub use prompt::PromptBuilder;

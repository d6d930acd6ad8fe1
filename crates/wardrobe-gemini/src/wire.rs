//! Request and response shapes for the `generateContent` endpoint.
//!
//! Field names follow the Gemini REST API (`inlineData`, `mimeType`).

use serde::{Deserialize, Serialize};

use wardrobe_core::ContentPart;

/// Top-level `generateContent` request body.
#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    /// The conversation contents; always a single turn here.
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Build a single-turn request from ordered prompt parts.
    pub fn from_parts(parts: Vec<ContentPart>) -> Self {
        Self {
            contents: vec![Content {
                parts: parts.into_iter().map(Part::from).collect(),
            }],
        }
    }
}

/// One content turn.
#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    /// Ordered parts of the turn.
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// One part of a content turn.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    /// Literal text.
    Text {
        /// The text payload.
        text: String,
    },
    /// Base64-encoded inline data.
    Inline {
        /// The inline payload.
        #[serde(rename = "inlineData")]
        inline_data: Blob,
    },
}

/// Base64-encoded media payload.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blob {
    /// Mime type of the data; the API may omit it in responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Base64 payload.
    pub data: String,
}

impl From<ContentPart> for Part {
    fn from(part: ContentPart) -> Self {
        match part {
            ContentPart::Text(text) => Self::Text { text },
            ContentPart::InlineImage { mime_type, data } => Self::Inline {
                inline_data: Blob {
                    mime_type: Some(mime_type),
                    data,
                },
            },
        }
    }
}

/// Top-level `generateContent` response body.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    /// Generated candidates, usually exactly one.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// The first inline-data part across all candidates, in response order.
    pub fn first_inline_blob(self) -> Option<Blob> {
        self.candidates
            .into_iter()
            .flat_map(|c| c.content.parts)
            .find_map(|part| match part {
                Part::Inline { inline_data } => Some(inline_data),
                Part::Text { .. } => None,
            })
    }
}

/// One generated candidate.
#[derive(Debug, Deserialize)]
pub struct Candidate {
    /// The candidate's content turn.
    pub content: Content,
}

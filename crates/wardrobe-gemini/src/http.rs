//! HTTP backend abstraction for the Gemini API.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. Requests are sent exactly once;
//! there is no retry layer.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::GeminiConfig;
use crate::error::{error_for_status, GeminiResult};

/// Trait for HTTP backends that can talk to the Gemini API.
///
/// This is an implementation detail - external code should use
/// `GeminiClient` through the `ImageGeneratorPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// POST a JSON body and deserialize the JSON response.
    async fn post_json(&self, url: &Url, body: &serde_json::Value) -> GeminiResult<serde_json::Value>;

    /// GET a URL and return the response status code.
    async fn get_status(&self, url: &Url) -> GeminiResult<u16>;
}

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &GeminiConfig) -> GeminiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn post_json(
        &self,
        url: &Url,
        body: &serde_json::Value,
    ) -> GeminiResult<serde_json::Value> {
        let response = self.client.post(url.as_str()).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(error_for_status(status.as_u16(), url.as_str()));
        }
        let value = response.json().await?;
        Ok(value)
    }

    async fn get_status(&self, url: &Url) -> GeminiResult<u16> {
        let response = self.client.get(url.as_str()).send().await?;
        Ok(response.status().as_u16())
    }
}

/// Serialize a body and deserialize the response through a backend.
pub(crate) async fn post_typed<B: Serialize, T: DeserializeOwned>(
    backend: &dyn HttpBackend,
    url: &Url,
    body: &B,
) -> GeminiResult<T> {
    let body = serde_json::to_value(body)?;
    let value = backend.post_json(url, &body).await?;
    let parsed = serde_json::from_value(value)?;
    Ok(parsed)
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Canned reply for the fake backend.
    #[derive(Clone)]
    pub enum CannedReply {
        /// Respond with this JSON body and a 200 status.
        Json(serde_json::Value),
        /// Respond with this HTTP error status.
        Status(u16),
    }

    /// A fake HTTP backend that returns canned replies and records the
    /// bodies it was sent.
    pub struct FakeBackend {
        replies: Mutex<HashMap<String, CannedReply>>,
        pub sent_bodies: Mutex<Vec<serde_json::Value>>,
    }

    impl FakeBackend {
        /// Create a new fake backend.
        pub fn new() -> Self {
            Self {
                replies: Mutex::new(HashMap::new()),
                sent_bodies: Mutex::new(Vec::new()),
            }
        }

        /// Add a canned reply for a URL pattern.
        pub fn with_reply(self, url_contains: &str, reply: CannedReply) -> Self {
            self.replies
                .lock()
                .unwrap()
                .insert(url_contains.to_string(), reply);
            self
        }

        fn find_reply(&self, url: &str) -> Option<CannedReply> {
            let replies = self.replies.lock().unwrap();
            replies
                .iter()
                .find(|(pattern, _)| url.contains(pattern.as_str()))
                .map(|(_, reply)| reply.clone())
        }
    }

    impl Default for FakeBackend {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn post_json(
            &self,
            url: &Url,
            body: &serde_json::Value,
        ) -> GeminiResult<serde_json::Value> {
            self.sent_bodies.lock().unwrap().push(body.clone());
            match self.find_reply(url.as_str()) {
                Some(CannedReply::Json(json)) => Ok(json),
                Some(CannedReply::Status(status)) => Err(error_for_status(status, url.as_str())),
                None => Err(error_for_status(404, url.as_str())),
            }
        }

        async fn get_status(&self, url: &Url) -> GeminiResult<u16> {
            match self.find_reply(url.as_str()) {
                Some(CannedReply::Json(_)) | None => Ok(200),
                Some(CannedReply::Status(status)) => Ok(status),
            }
        }
    }
}

use crate::core::AnimationSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Fetches Lottie payloads over HTTP.
#[derive(Debug, Clone)]
pub struct HttpAnimationSource {
    client: Client,
}

impl HttpAnimationSource {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("portfolio-page/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for HttpAnimationSource {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_TIMEOUT_SECONDS))
            .unwrap_or_else(|_| Self::with_client(Client::new()))
    }
}

#[async_trait]
impl AnimationSource for HttpAnimationSource {
    async fn fetch(&self, url: &str) -> Option<serde_json::Value> {
        tracing::debug!("Fetching animation from: {}", url);
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Animation fetch failed for {}: {}", url, e);
                return None;
            }
        };

        if response.status() != StatusCode::OK {
            tracing::warn!(
                "Animation fetch for {} returned {}, omitting",
                url,
                response.status()
            );
            return None;
        }

        match response.json::<serde_json::Value>().await {
            Ok(payload) => Some(payload),
            Err(e) => {
                tracing::warn!("Animation payload from {} is not JSON: {}", url, e);
                None
            }
        }
    }
}

use crate::dataset::Payload;
use crate::ports::PayloadSource;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// HttpPayloadSource adapter fetching the two source documents from a
/// scanner origin exposing `/data` and `/flags`.
///
/// # Async Support
/// Uses the async reqwest client so the use case can overlap both fetches.
pub struct HttpPayloadSource {
    client: reqwest::Client,
    origin: String,
}

impl HttpPayloadSource {
    /// Creates a new source for the given origin (e.g. `http://localhost:1337`).
    pub fn new(origin: impl Into<String>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("depviz/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            origin: origin.into().trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.origin, path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", url))?;

        if !response.status().is_success() {
            anyhow::bail!("{} returned status code {}", url, response.status());
        }

        response
            .json()
            .await
            .with_context(|| format!("Failed to decode JSON from {}", url))
    }
}

#[async_trait]
impl PayloadSource for HttpPayloadSource {
    async fn fetch_payload(&self) -> Result<Payload> {
        self.get_json("/data").await
    }

    async fn fetch_flags(&self) -> Result<Value> {
        self.get_json("/flags").await
    }
}

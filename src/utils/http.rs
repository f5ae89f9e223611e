// src/utils/http.rs

//! HTTP client utilities and the reqwest-backed image host.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::{FetchError, Result};
use crate::models::CrawlerConfig;
use crate::services::{HostResponse, ImageHost};

/// Create a configured asynchronous HTTP client.
///
/// The client-level timeout is a backstop; the prober enforces the
/// per-attempt timeout itself.
pub fn create_client(config: &CrawlerConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(config.timeout() + Duration::from_secs(1))
        .pool_max_idle_per_host(config.max_concurrent)
        .build()?;
    Ok(client)
}

#[async_trait]
impl ImageHost for reqwest::Client {
    async fn fetch(&self, url: &str) -> std::result::Result<HostResponse, FetchError> {
        let response = self.get(url).send().await?;
        let status = response.status().as_u16();

        // Only successful bodies are worth downloading.
        let body = if response.status().is_success() {
            response.bytes().await?.to_vec()
        } else {
            Vec::new()
        };

        Ok(HostResponse { status, body })
    }
}

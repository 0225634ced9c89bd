use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;

use crate::service::traits::ImagePreloader;

/// Preloads logos with a plain GET; any non-2xx status is a failure
#[derive(Debug, Clone, Default)]
pub struct HttpImagePreloader {
    client: Client,
}

impl HttpImagePreloader {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl ImagePreloader for HttpImagePreloader {
    async fn preload(&self, url: &str) -> Result<()> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("request for {} failed", url))?
            .error_for_status()?;

        // Drain the body so the transfer actually completes
        let bytes = response.bytes().await?;
        debug!("Preloaded {} ({} bytes)", url, bytes.len());
        Ok(())
    }
}

/// For targets without an image cache to warm
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopImagePreloader;

#[async_trait::async_trait]
impl ImagePreloader for NoopImagePreloader {
    async fn preload(&self, _url: &str) -> Result<()> {
        Ok(())
    }
}

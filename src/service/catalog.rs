use std::collections::HashSet;
use std::sync::Arc;

use futures::stream::{FuturesUnordered, StreamExt};
use log::{debug, info, warn};
use reqwest::Client;
use serde_json::Value;

use crate::config::CatalogConfig;
use crate::logic::convert_records;
use crate::model::ProductInstance;
use crate::service::error::{CatalogError, FetchFailure, ImagePreloadFailure};
use crate::service::preload::HttpImagePreloader;
use crate::service::traits::ImagePreloader;

/// Fetches the remote catalog and turns it into view models.
///
/// Constructed explicitly and handed to whoever needs it; there is no shared
/// global instance. The request carries no timeout of its own.
#[derive(Clone)]
pub struct CatalogService {
    client: Client,
    endpoint: String,
    preloader: Arc<dyn ImagePreloader>,
}

impl CatalogService {
    pub fn new(endpoint: impl Into<String>, preloader: Arc<dyn ImagePreloader>) -> Self {
        Self::with_client(Client::new(), endpoint, preloader)
    }

    pub fn with_client(
        client: Client,
        endpoint: impl Into<String>,
        preloader: Arc<dyn ImagePreloader>,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            preloader,
        }
    }

    /// Build a service that preloads logos over HTTP with the same client
    pub fn from_config(config: &CatalogConfig) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        let client = builder.build()?;
        let preloader = Arc::new(HttpImagePreloader::new(client.clone()));

        Ok(Self::with_client(client, config.endpoint.clone(), preloader))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch and convert the catalog, optionally warming every logo first.
    ///
    /// With `preload_logos`, the call fails as soon as any logo fails; the
    /// remaining preloads keep running in the background.
    pub async fn fetch_catalog(
        &self,
        preload_logos: bool,
    ) -> Result<Vec<ProductInstance>, CatalogError> {
        let body = self.fetch_body().await?;
        let catalog = decode_catalog(&body)?;
        info!("Loaded {} catalog instances", catalog.len());

        if preload_logos {
            self.preload_logos(&catalog).await?;
        }

        Ok(catalog)
    }

    async fn fetch_body(&self) -> Result<Vec<u8>, FetchFailure> {
        info!("Fetching catalog from {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        debug!("Catalog endpoint answered {}", status);
        if !status.is_success() {
            return Err(FetchFailure::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    /// Preload one logo per instance concurrently. First failure wins.
    pub async fn preload_logos(
        &self,
        catalog: &[ProductInstance],
    ) -> Result<(), ImagePreloadFailure> {
        let mut seen = HashSet::new();
        let mut pending = FuturesUnordered::new();

        for instance in catalog {
            if instance.logo.is_empty() || !seen.insert(instance.id.as_str()) {
                continue;
            }

            let preloader = Arc::clone(&self.preloader);
            let url = instance.logo.clone();
            let task_url = url.clone();
            // Spawned so that giving up on the join does not abort requests already in flight
            let handle = tokio::spawn(async move { preloader.preload(&task_url).await });
            pending.push(async move { (url, handle.await) });
        }

        debug!("Preloading {} logos", pending.len());

        while let Some((url, joined)) = pending.next().await {
            let message = match joined {
                Ok(Ok(())) => continue,
                Ok(Err(err)) => format!("{:#}", err),
                Err(join_err) => join_err.to_string(),
            };
            warn!("Logo preload failed for {}: {}", url, message);
            return Err(ImagePreloadFailure { url, message });
        }

        Ok(())
    }
}

/// Parse a catalog response body. Empty or `null` bodies are an empty catalog.
pub fn decode_catalog(body: &[u8]) -> Result<Vec<ProductInstance>, CatalogError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    let records: Option<Vec<Value>> =
        serde_json::from_slice(body).map_err(CatalogError::InvalidBody)?;

    Ok(convert_records(records.unwrap_or_default())?)
}

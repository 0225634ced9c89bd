use anyhow::Result;

/// Warms an image cache for a logo reference.
/// Only success or failure matters; the body is never inspected.
#[async_trait::async_trait]
pub trait ImagePreloader: Send + Sync {
    async fn preload(&self, url: &str) -> Result<()>;
}

// Image loading seam for link row thumbnails
use async_trait::async_trait;
use bytes::Bytes;

#[async_trait]
pub trait ImageLoader: Send + Sync {
    /// Load raw image bytes. Failures are swallowed and reported as `None`.
    async fn load(&self, url: &str) -> Option<Bytes>;
}

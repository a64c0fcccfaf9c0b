use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ImageStoreError {
    #[error("Image store I/O error: {0}")]
    Io(String),
}

/// Where uploaded project images live. The filesystem adapter writes under
/// the public upload directory; records keep only the returned relative URL.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Persist image bytes, returning the relative URL to store.
    async fn save(&self, bytes: Vec<u8>, extension: &str) -> Result<String, ImageStoreError>;

    /// Best-effort removal of a previously stored image.
    async fn delete(&self, relative_url: &str) -> Result<(), ImageStoreError>;
}

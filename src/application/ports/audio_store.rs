use async_trait::async_trait;
use bytes::Bytes;

/// Stores rendered audio files and maps them to publicly servable URLs.
#[async_trait]
pub trait AudioStore: Send + Sync {
    /// Writes `data` under `file_name` and returns the public URL path.
    async fn put(&self, file_name: &str, data: Bytes) -> Result<String, AudioStoreError>;

    /// Size in bytes of an existing file.
    async fn head(&self, file_name: &str) -> Result<u64, AudioStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioStoreError {
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{AudioStore, AudioStoreError};

/// Audio store writing under a local directory that the router also serves
/// as static files.
pub struct LocalAudioStore {
    inner: Arc<LocalFileSystem>,
    public_base_path: String,
}

impl LocalAudioStore {
    pub fn new(base_path: PathBuf, public_base_path: String) -> Result<Self, AudioStoreError> {
        std::fs::create_dir_all(&base_path).map_err(AudioStoreError::Io)?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| AudioStoreError::WriteFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
            public_base_path: public_base_path.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait::async_trait]
impl AudioStore for LocalAudioStore {
    async fn put(&self, file_name: &str, data: Bytes) -> Result<String, AudioStoreError> {
        let store_path = StorePath::from(file_name);
        self.inner
            .put(&store_path, PutPayload::from(data))
            .await
            .map_err(|e| AudioStoreError::WriteFailed(e.to_string()))?;
        Ok(format!("{}/{}", self.public_base_path, file_name))
    }

    async fn head(&self, file_name: &str) -> Result<u64, AudioStoreError> {
        let store_path = StorePath::from(file_name);
        let meta = self
            .inner
            .head(&store_path)
            .await
            .map_err(|e| AudioStoreError::NotFound(e.to_string()))?;
        Ok(meta.size)
    }
}

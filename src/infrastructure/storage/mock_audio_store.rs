use std::sync::Mutex;

use bytes::Bytes;

use crate::application::ports::{AudioStore, AudioStoreError};

/// In-memory store that records every write, so tests can assert on file
/// names and rendered bytes.
#[derive(Default)]
pub struct MockAudioStore {
    pub writes: Mutex<Vec<(String, Bytes)>>,
}

impl MockAudioStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl AudioStore for MockAudioStore {
    async fn put(&self, file_name: &str, data: Bytes) -> Result<String, AudioStoreError> {
        self.writes
            .lock()
            .unwrap()
            .push((file_name.to_string(), data));
        Ok(format!("/audio/{}", file_name))
    }

    async fn head(&self, file_name: &str) -> Result<u64, AudioStoreError> {
        self.writes
            .lock()
            .unwrap()
            .iter()
            .find(|(name, _)| name == file_name)
            .map(|(_, data)| data.len() as u64)
            .ok_or_else(|| AudioStoreError::NotFound(file_name.to_string()))
    }
}

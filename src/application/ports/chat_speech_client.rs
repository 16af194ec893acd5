use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::ChatVoice;

/// Chat-provider speech endpoint. One call renders one text chunk.
#[async_trait]
pub trait ChatSpeechClient: Send + Sync {
    async fn speak(&self, voice: ChatVoice, text: &str) -> Result<Bytes, ChatSpeechError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ChatSpeechError {
    #[error("authentication rejected: {0}")]
    AuthRejected(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid voice: {0}")]
    InvalidVoice(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
}

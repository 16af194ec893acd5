use async_trait::async_trait;
use bytes::Bytes;

/// Free cloud-voice synthesis endpoint driven by SSML documents.
#[async_trait]
pub trait CloudSpeechClient: Send + Sync {
    async fn speak_ssml(&self, ssml: &str, voice: &str) -> Result<Bytes, CloudSpeechError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CloudSpeechError {
    #[error("synthesis failed: {0}")]
    SynthesisFailed(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
}

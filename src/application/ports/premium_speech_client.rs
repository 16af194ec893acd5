use async_trait::async_trait;
use bytes::Bytes;

/// Premium multilingual voice provider.
///
/// `verify_credentials` is called once before any synthesis so credential
/// problems surface before audio work starts.
#[async_trait]
pub trait PremiumSpeechClient: Send + Sync {
    async fn verify_credentials(&self) -> Result<(), PremiumSpeechError>;

    async fn synthesize(&self, voice_id: &str, text: &str) -> Result<Bytes, PremiumSpeechError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PremiumSpeechError {
    #[error("authentication rejected: {0}")]
    AuthRejected(String),
    #[error("quota exceeded: {0}")]
    QuotaExceeded(String),
    #[error("unusual activity detected: {0}")]
    UnusualActivity(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
}

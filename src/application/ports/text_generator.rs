use async_trait::async_trait;

/// Chat-completion provider used to write podcast scripts.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, TextGeneratorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TextGeneratorError {
    #[error("authentication rejected: {0}")]
    AuthRejected(String),
    #[error("rate limited")]
    RateLimited,
    #[error("prompt exceeds the model context window: {0}")]
    ContextLength(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

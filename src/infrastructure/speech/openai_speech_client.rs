use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use serde::Serialize;

use crate::application::ports::{ChatSpeechClient, ChatSpeechError};
use crate::domain::ChatVoice;

/// Speech endpoint of the OpenAI API.
pub struct OpenAiSpeechClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct SpeechRequest {
    model: String,
    voice: String,
    input: String,
}

impl OpenAiSpeechClient {
    pub fn new(client: Client, base_url: String, api_key: String, model: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
            model,
        }
    }
}

#[async_trait]
impl ChatSpeechClient for OpenAiSpeechClient {
    async fn speak(&self, voice: ChatVoice, text: &str) -> Result<Bytes, ChatSpeechError> {
        let request_body = SpeechRequest {
            model: self.model.clone(),
            voice: voice.as_str().to_string(),
            input: text.to_string(),
        };

        tracing::debug!(voice = %voice, chars = text.len(), "Requesting chat speech synthesis");

        let response = self
            .client
            .post(format!("{}/audio/speech", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| ChatSpeechError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ChatSpeechError::RateLimited);
        }

        if response.status() == reqwest::StatusCode::UNAUTHORIZED
            || response.status() == reqwest::StatusCode::FORBIDDEN
        {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatSpeechError::AuthRejected(body));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            if status == reqwest::StatusCode::BAD_REQUEST && body.contains("voice") {
                return Err(ChatSpeechError::InvalidVoice(body));
            }
            return Err(ChatSpeechError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        response
            .bytes()
            .await
            .map_err(|e| ChatSpeechError::ApiRequestFailed(e.to_string()))
    }
}

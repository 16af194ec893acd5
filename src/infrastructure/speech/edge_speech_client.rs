use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;

use crate::application::ports::{CloudSpeechClient, CloudSpeechError};

const OUTPUT_FORMAT: &str = "audio-24khz-48kbitrate-mono-mp3";

/// Cognitive-services speech endpoint used by the free neural voices.
/// No API credential is required.
pub struct EdgeSpeechClient {
    client: Client,
    endpoint: String,
}

impl EdgeSpeechClient {
    pub fn new(client: Client, region: &str) -> Self {
        let endpoint = format!(
            "https://{}.tts.speech.microsoft.com/cognitiveservices/v1",
            region
        );
        Self { client, endpoint }
    }
}

#[async_trait]
impl CloudSpeechClient for EdgeSpeechClient {
    async fn speak_ssml(&self, ssml: &str, voice: &str) -> Result<Bytes, CloudSpeechError> {
        tracing::debug!(voice = %voice, "Requesting cloud speech synthesis");

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/ssml+xml")
            .header("X-Microsoft-OutputFormat", OUTPUT_FORMAT)
            .header("User-Agent", "podforge")
            .body(ssml.to_string())
            .send()
            .await
            .map_err(|e| CloudSpeechError::ApiRequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(CloudSpeechError::SynthesisFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        response
            .bytes()
            .await
            .map_err(|e| CloudSpeechError::ApiRequestFailed(e.to_string()))
    }
}

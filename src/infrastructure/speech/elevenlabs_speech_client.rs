use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{PremiumSpeechClient, PremiumSpeechError};

const VOICE_STABILITY: f32 = 0.5;
const VOICE_SIMILARITY_BOOST: f32 = 0.75;

/// ElevenLabs text-to-speech client.
pub struct ElevenLabsSpeechClient {
    client: Client,
    base_url: String,
    api_key: String,
    model_id: String,
}

#[derive(Serialize)]
struct SynthesisRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

#[derive(Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    detail: Option<ErrorDetail>,
}

#[derive(Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    status: String,
    #[serde(default)]
    message: String,
}

impl ElevenLabsSpeechClient {
    pub fn new(client: Client, base_url: String, api_key: String, model_id: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model_id,
        }
    }

    /// Maps the provider's JSON error envelope to a typed error. Falls back
    /// to the HTTP status when the body is not the documented shape.
    fn classify_error(status: reqwest::StatusCode, body: &str) -> PremiumSpeechError {
        if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
            if let Some(detail) = envelope.detail {
                return match detail.status.as_str() {
                    "quota_exceeded" => PremiumSpeechError::QuotaExceeded(detail.message),
                    "detected_unusual_activity" => {
                        PremiumSpeechError::UnusualActivity(detail.message)
                    }
                    "invalid_api_key" | "needs_authorization" => {
                        PremiumSpeechError::AuthRejected(detail.message)
                    }
                    other => PremiumSpeechError::ApiRequestFailed(format!(
                        "{}: {}",
                        other, detail.message
                    )),
                };
            }
        }
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return PremiumSpeechError::AuthRejected(body.to_string());
        }
        PremiumSpeechError::ApiRequestFailed(format!("HTTP {}: {}", status, body))
    }
}

#[async_trait]
impl PremiumSpeechClient for ElevenLabsSpeechClient {
    async fn verify_credentials(&self) -> Result<(), PremiumSpeechError> {
        let response = self
            .client
            .get(format!("{}/v1/user", self.base_url))
            .header("xi-api-key", &self.api_key)
            .send()
            .await
            .map_err(|e| PremiumSpeechError::ApiRequestFailed(e.to_string()))?;

        if response.status().is_success() {
            return Ok(());
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(Self::classify_error(status, &body))
    }

    async fn synthesize(&self, voice_id: &str, text: &str) -> Result<Bytes, PremiumSpeechError> {
        let request_body = SynthesisRequest {
            text,
            model_id: &self.model_id,
            voice_settings: VoiceSettings {
                stability: VOICE_STABILITY,
                similarity_boost: VOICE_SIMILARITY_BOOST,
            },
        };

        tracing::debug!(voice_id = %voice_id, chars = text.len(), "Requesting premium speech synthesis");

        let response = self
            .client
            .post(format!("{}/v1/text-to-speech/{}", self.base_url, voice_id))
            .header("Accept", "audio/mpeg")
            .header("xi-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| PremiumSpeechError::ApiRequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Self::classify_error(status, &body));
        }

        response
            .bytes()
            .await
            .map_err(|e| PremiumSpeechError::ApiRequestFailed(e.to_string()))
    }
}

use std::sync::Arc;

use crate::application::ports::{
    ChatSpeechError, PremiumSpeechError, ProviderCatalog,
};
use crate::domain::{ApiCredentials, ContentSource, GenerationParams};

use super::script_service::{ScriptOrigin, ScriptService};
use super::synthesis_service::{AudioFidelity, SynthesisError, SynthesisService};

/// What the audio URL in a report points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioSource {
    /// Freshly rendered audio covering the whole script.
    Generated,
    /// Freshly rendered audio covering only part of the script.
    Partial,
    /// The bundled sample file, served because synthesis failed.
    Sample,
}

impl AudioSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioSource::Generated => "generated",
            AudioSource::Partial => "partial",
            AudioSource::Sample => "sample",
        }
    }
}

/// Outcome of one generation run. Always produced, never an error: failures
/// degrade into a sample-audio report with a human-readable explanation.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub success: bool,
    pub transcript: String,
    pub audio_url: String,
    pub audio_source: AudioSource,
    pub error: Option<String>,
    pub note: Option<String>,
    pub duration_seconds: u32,
}

/// End-to-end orchestrator. Runs script generation and then audio synthesis
/// and shapes whichever outcome into the uniform report.
pub struct PodcastService<Cat: ProviderCatalog> {
    catalog: Arc<Cat>,
    script_service: ScriptService,
    synthesis_service: SynthesisService,
    sample_audio_path: String,
}

impl<Cat: ProviderCatalog> PodcastService<Cat> {
    pub fn new(
        catalog: Arc<Cat>,
        script_service: ScriptService,
        synthesis_service: SynthesisService,
        sample_audio_path: String,
    ) -> Self {
        Self {
            catalog,
            script_service,
            synthesis_service,
            sample_audio_path,
        }
    }

    #[tracing::instrument(skip(self, source, params, credentials), fields(engine = %params.tts_model, language = %params.language))]
    pub async fn generate(
        &self,
        source: &ContentSource,
        params: &GenerationParams,
        credentials: &ApiCredentials,
    ) -> GenerationReport {
        let generator = self.catalog.text_generator(credentials);
        let script = self
            .script_service
            .generate(source, params, generator.as_deref())
            .await;
        if script.origin == ScriptOrigin::Example {
            tracing::info!("Proceeding with the example script");
        }

        match self
            .synthesis_service
            .synthesize(self.catalog.as_ref(), &script.text, params, credentials)
            .await
        {
            Ok(artifact) => {
                let audio_source = match artifact.fidelity {
                    AudioFidelity::Complete => AudioSource::Generated,
                    AudioFidelity::Partial => AudioSource::Partial,
                };
                GenerationReport {
                    success: true,
                    duration_seconds: estimate_duration_seconds(&script.text),
                    transcript: script.text,
                    audio_url: artifact.url,
                    audio_source,
                    error: None,
                    note: artifact.note,
                }
            }
            Err(error) => {
                tracing::warn!(error = %error, "Synthesis failed, serving the sample audio");
                GenerationReport {
                    success: false,
                    transcript: String::new(),
                    audio_url: self.sample_fallback_url(),
                    audio_source: AudioSource::Sample,
                    error: Some(describe_synthesis_error(&error)),
                    note: None,
                    duration_seconds: 0,
                }
            }
        }
    }

    /// Sample URL with a cache-busting timestamp so clients re-fetch it.
    fn sample_fallback_url(&self) -> String {
        format!(
            "{}?t={}",
            self.sample_audio_path,
            chrono::Utc::now().timestamp_millis()
        )
    }
}

/// Playback length estimate at a conversational 150 words per minute.
fn estimate_duration_seconds(transcript: &str) -> u32 {
    let words = transcript.split_whitespace().count() as f32;
    (words / 2.5).round() as u32
}

/// Collapses provider error detail into a stable, human-readable message.
fn describe_synthesis_error(error: &SynthesisError) -> String {
    match error {
        SynthesisError::MissingCredential { .. } | SynthesisError::UnsupportedEngine(_) => {
            error.to_string()
        }
        SynthesisError::ChatSpeech(ChatSpeechError::AuthRejected(_))
        | SynthesisError::PremiumSpeech(PremiumSpeechError::AuthRejected(_)) => {
            "the TTS provider rejected the supplied API key".to_string()
        }
        SynthesisError::ChatSpeech(ChatSpeechError::RateLimited)
        | SynthesisError::PremiumSpeech(PremiumSpeechError::QuotaExceeded(_)) => {
            "the TTS provider quota or rate limit was exceeded".to_string()
        }
        SynthesisError::PremiumSpeech(PremiumSpeechError::UnusualActivity(_)) => {
            "the TTS provider blocked the request as unusual activity".to_string()
        }
        SynthesisError::ChatSpeech(ChatSpeechError::ApiRequestFailed(_))
        | SynthesisError::CloudSpeech(_)
        | SynthesisError::PremiumSpeech(PremiumSpeechError::ApiRequestFailed(_)) => {
            "the TTS provider could not be reached or failed to respond".to_string()
        }
        other => format!("audio synthesis failed: {}", other),
    }
}

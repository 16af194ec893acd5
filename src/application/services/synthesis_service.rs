use std::sync::Arc;

use bytes::{Bytes, BytesMut};
use chrono::Utc;
use unicode_segmentation::UnicodeSegmentation;

use crate::application::ports::{
    AudioStore, AudioStoreError, ChatSpeechClient, ChatSpeechError, CloudSpeechClient,
    CloudSpeechError, PremiumSpeechClient, PremiumSpeechError, ProviderCatalog,
};
use crate::domain::{
    ApiCredentials, ChatVoice, DialogueTurn, GenerationParams, TtsEngine,
};

use super::dialogue_extractor::extract_dialogue;
use super::transcript_cleaner::strip_speech_markup;

/// Cost and size bounds for the synthesis pipelines.
#[derive(Debug, Clone)]
pub struct SynthesisLimits {
    /// Longest text chunk sent to the chat-provider speech endpoint.
    pub chat_chunk_chars: usize,
    /// Most dialogue turns rendered by the premium provider per request.
    pub premium_turn_cap: usize,
    /// Longest single turn sent to the premium provider.
    pub premium_turn_chars: usize,
}

/// Whether the stored audio covers the whole script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFidelity {
    Complete,
    Partial,
}

/// A successfully stored audio file.
#[derive(Debug, Clone)]
pub struct AudioArtifact {
    pub url: String,
    pub fidelity: AudioFidelity,
    pub note: Option<String>,
}

/// Renders a transcript to audio with the engine named in the request
/// parameters and stores the result.
pub struct SynthesisService {
    store: Arc<dyn AudioStore>,
    limits: SynthesisLimits,
}

impl SynthesisService {
    pub fn new(store: Arc<dyn AudioStore>, limits: SynthesisLimits) -> Self {
        Self { store, limits }
    }

    #[tracing::instrument(skip(self, catalog, transcript, params, credentials), fields(engine = %params.tts_model))]
    pub async fn synthesize(
        &self,
        catalog: &dyn ProviderCatalog,
        transcript: &str,
        params: &GenerationParams,
        credentials: &ApiCredentials,
    ) -> Result<AudioArtifact, SynthesisError> {
        let engine: TtsEngine = params
            .tts_model
            .parse()
            .map_err(|_| SynthesisError::UnsupportedEngine(params.tts_model.clone()))?;

        match engine {
            TtsEngine::OpenAi => {
                let client = catalog
                    .chat_speech(credentials)
                    .ok_or(SynthesisError::MissingCredential {
                        key: "OpenAI",
                        engine: "openai",
                    })?;
                self.synthesize_chat(client.as_ref(), transcript, params)
                    .await
            }
            TtsEngine::Edge => {
                let client = catalog.cloud_speech();
                self.synthesize_cloud(client.as_ref(), transcript, params)
                    .await
            }
            TtsEngine::ElevenLabs => {
                let client = catalog
                    .premium_speech(credentials)
                    .ok_or(SynthesisError::MissingCredential {
                        key: "ElevenLabs",
                        engine: "elevenlabs",
                    })?;
                self.synthesize_premium(client.as_ref(), transcript, params)
                    .await
            }
        }
    }

    /// Chat-provider pipeline. Long turns are split into fixed-size chunks
    /// and rendered with one call each; any provider error aborts the run.
    async fn synthesize_chat(
        &self,
        client: &dyn ChatSpeechClient,
        transcript: &str,
        params: &GenerationParams,
    ) -> Result<AudioArtifact, SynthesisError> {
        let turns = extract_dialogue(transcript, params, TtsEngine::OpenAi);
        tracing::debug!(turns = turns.len(), "Extracted dialogue for chat synthesis");

        let mut audio = BytesMut::new();
        for turn in &turns {
            let text = strip_speech_markup(&turn.text);
            if text.is_empty() {
                continue;
            }
            let voice = turn.voice_selector.parse::<ChatVoice>().unwrap_or_else(|_| {
                tracing::warn!(voice = %turn.voice_selector, "Unknown chat voice, substituting the default");
                ChatVoice::default()
            });
            for chunk in chunk_text(&text, self.limits.chat_chunk_chars) {
                let rendered = client.speak(voice, &chunk).await?;
                audio.extend_from_slice(&rendered);
            }
        }

        if audio.is_empty() {
            return Err(SynthesisError::NoAudioProduced);
        }

        let url = self.write_audio(TtsEngine::OpenAi, audio.freeze()).await?;
        Ok(AudioArtifact {
            url,
            fidelity: AudioFidelity::Complete,
            note: None,
        })
    }

    /// Free cloud-voice pipeline. Each turn is wrapped in an SSML document;
    /// failed turns are skipped rather than aborting the whole run.
    async fn synthesize_cloud(
        &self,
        client: &dyn CloudSpeechClient,
        transcript: &str,
        params: &GenerationParams,
    ) -> Result<AudioArtifact, SynthesisError> {
        let turns = extract_dialogue(transcript, params, TtsEngine::Edge);
        tracing::debug!(turns = turns.len(), "Extracted dialogue for cloud synthesis");
        let locale = params.language.locale();

        let mut audio = BytesMut::new();
        let mut rendered = 0usize;
        let mut skipped = 0usize;
        for turn in &turns {
            let text = strip_speech_markup(&turn.text);
            if text.is_empty() {
                continue;
            }
            let ssml = build_ssml(&turn.voice_selector, locale, &text);
            match client.speak_ssml(&ssml, &turn.voice_selector).await {
                Ok(chunk) => {
                    audio.extend_from_slice(&chunk);
                    rendered += 1;
                }
                Err(error) => {
                    skipped += 1;
                    tracing::warn!(
                        error = %error,
                        speaker = %turn.speaker,
                        "Skipping turn after a synthesis failure"
                    );
                }
            }
        }

        if audio.is_empty() {
            return Err(SynthesisError::NoAudioProduced);
        }

        let url = self.write_audio(TtsEngine::Edge, audio.freeze()).await?;
        let fidelity = if skipped == 0 {
            AudioFidelity::Complete
        } else {
            AudioFidelity::Partial
        };
        let note = (skipped > 0).then(|| {
            format!(
                "skipped {} of {} turns after provider errors",
                skipped,
                rendered + skipped
            )
        });
        Ok(AudioArtifact {
            url,
            fidelity,
            note,
        })
    }

    /// Premium pipeline. Credentials are verified before any audio work; the
    /// turn count is capped to bound spend. A mid-run failure keeps whatever
    /// audio already exists.
    async fn synthesize_premium(
        &self,
        client: &dyn PremiumSpeechClient,
        transcript: &str,
        params: &GenerationParams,
    ) -> Result<AudioArtifact, SynthesisError> {
        client.verify_credentials().await?;

        let turns = extract_dialogue(transcript, params, TtsEngine::ElevenLabs);
        let total = turns.len();
        let capped = total.min(self.limits.premium_turn_cap);
        tracing::debug!(total, capped, "Extracted dialogue for premium synthesis");

        let mut audio = BytesMut::new();
        let mut synthesized = 0usize;
        let mut abort: Option<PremiumSpeechError> = None;

        for (index, turn) in turns.iter().take(capped).enumerate() {
            let text = strip_speech_markup(&turn.text);
            if text.is_empty() {
                continue;
            }
            let text = truncate_graphemes(&text, self.limits.premium_turn_chars);
            let voice_id = premium_voice_for(turn, index, params);
            match client.synthesize(&voice_id, &text).await {
                Ok(chunk) => {
                    audio.extend_from_slice(&chunk);
                    synthesized += 1;
                }
                Err(error) => {
                    abort = Some(error);
                    break;
                }
            }
        }

        match abort {
            Some(error) if audio.is_empty() => Err(error.into()),
            Some(error) => {
                tracing::warn!(
                    error = %error,
                    synthesized,
                    "Premium synthesis aborted, keeping the partial audio"
                );
                let url = self
                    .write_audio(TtsEngine::ElevenLabs, audio.freeze())
                    .await?;
                Ok(AudioArtifact {
                    url,
                    fidelity: AudioFidelity::Partial,
                    note: Some(format!(
                        "synthesized {} of {} turns before the provider failed",
                        synthesized, capped
                    )),
                })
            }
            None if audio.is_empty() => Err(SynthesisError::NoAudioProduced),
            None => {
                let url = self
                    .write_audio(TtsEngine::ElevenLabs, audio.freeze())
                    .await?;
                let fidelity = if capped < total {
                    AudioFidelity::Partial
                } else {
                    AudioFidelity::Complete
                };
                let note = (capped < total)
                    .then(|| format!("dialogue capped at {} of {} turns", capped, total));
                Ok(AudioArtifact {
                    url,
                    fidelity,
                    note,
                })
            }
        }
    }

    async fn write_audio(
        &self,
        engine: TtsEngine,
        audio: Bytes,
    ) -> Result<String, SynthesisError> {
        let file_name = format!(
            "podcast_{}_{}.mp3",
            engine.as_str(),
            Utc::now().timestamp_millis()
        );
        let url = self.store.put(&file_name, audio).await?;
        tracing::info!(file = %file_name, "Audio file written");
        Ok(url)
    }
}

/// Splits text into consecutive chunks of at most `max_chars` grapheme
/// clusters, preserving order and never cutting inside a cluster.
fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    graphemes
        .chunks(max_chars.max(1))
        .map(|chunk| chunk.concat())
        .collect()
}

fn truncate_graphemes(text: &str, max_chars: usize) -> String {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    if graphemes.len() <= max_chars {
        return text.to_string();
    }
    graphemes[..max_chars].concat()
}

/// Premium voice for one turn: speaker labels are matched case-insensitively
/// against the configured names, and unmatched labels alternate by turn
/// index so a two-voice rhythm survives label drift.
fn premium_voice_for(turn: &DialogueTurn, index: usize, params: &GenerationParams) -> String {
    let label = turn.speaker.to_lowercase();
    let first = params.first_speaker.trim().to_lowercase();
    let second = params.second_speaker.trim().to_lowercase();

    if !first.is_empty() && label.contains(&first) {
        params.first_speaker_premium_voice.clone()
    } else if !second.is_empty() && label.contains(&second) {
        params.second_speaker_premium_voice.clone()
    } else if index % 2 == 0 {
        params.first_speaker_premium_voice.clone()
    } else {
        params.second_speaker_premium_voice.clone()
    }
}

fn build_ssml(voice: &str, locale: &str, text: &str) -> String {
    format!(
        r#"<speak version="1.0" xmlns="http://www.w3.org/2001/10/synthesis" xml:lang="{locale}"><voice name="{voice}">{text}</voice></speak>"#,
        locale = locale,
        voice = voice,
        text = xml_escape(text),
    )
}

fn xml_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("{key} API key is required for the {engine} TTS engine")]
    MissingCredential {
        key: &'static str,
        engine: &'static str,
    },
    #[error("unsupported TTS engine: {0}")]
    UnsupportedEngine(String),
    #[error("no audio could be produced from the script")]
    NoAudioProduced,
    #[error("chat speech: {0}")]
    ChatSpeech(#[from] ChatSpeechError),
    #[error("cloud speech: {0}")]
    CloudSpeech(#[from] CloudSpeechError),
    #[error("premium speech: {0}")]
    PremiumSpeech(#[from] PremiumSpeechError),
    #[error("audio store: {0}")]
    Store(#[from] AudioStoreError),
}

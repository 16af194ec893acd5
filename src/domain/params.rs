use std::fmt;
use std::str::FromStr;

use super::Language;

/// Conversational register the script generator is asked to write in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PodcastStyle {
    Conversational,
    Debate,
    Interview,
    Educational,
}

impl PodcastStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            PodcastStyle::Conversational => "conversational",
            PodcastStyle::Debate => "debate",
            PodcastStyle::Interview => "interview",
            PodcastStyle::Educational => "educational",
        }
    }
}

impl FromStr for PodcastStyle {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "conversational" => Ok(PodcastStyle::Conversational),
            "debate" => Ok(PodcastStyle::Debate),
            "interview" => Ok(PodcastStyle::Interview),
            "educational" => Ok(PodcastStyle::Educational),
            other => Err(format!("unsupported podcast style: {}", other)),
        }
    }
}

impl fmt::Display for PodcastStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Voice catalog of the chat-provider TTS endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChatVoice {
    #[default]
    Alloy,
    Echo,
    Fable,
    Onyx,
    Nova,
    Shimmer,
}

impl ChatVoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatVoice::Alloy => "alloy",
            ChatVoice::Echo => "echo",
            ChatVoice::Fable => "fable",
            ChatVoice::Onyx => "onyx",
            ChatVoice::Nova => "nova",
            ChatVoice::Shimmer => "shimmer",
        }
    }
}

impl FromStr for ChatVoice {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "alloy" => Ok(ChatVoice::Alloy),
            "echo" => Ok(ChatVoice::Echo),
            "fable" => Ok(ChatVoice::Fable),
            "onyx" => Ok(ChatVoice::Onyx),
            "nova" => Ok(ChatVoice::Nova),
            "shimmer" => Ok(ChatVoice::Shimmer),
            other => Err(format!("unknown chat voice: {}", other)),
        }
    }
}

impl fmt::Display for ChatVoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// TTS engine requested for audio rendering.
///
/// The wire value stays a plain string in [`GenerationParams`] so an unknown
/// engine surfaces as a dispatch error rather than a deserialization failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TtsEngine {
    OpenAi,
    Edge,
    ElevenLabs,
}

impl TtsEngine {
    pub fn as_str(&self) -> &'static str {
        match self {
            TtsEngine::OpenAi => "openai",
            TtsEngine::Edge => "edge",
            TtsEngine::ElevenLabs => "elevenlabs",
        }
    }
}

impl FromStr for TtsEngine {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "openai" => Ok(TtsEngine::OpenAi),
            "edge" => Ok(TtsEngine::Edge),
            "elevenlabs" => Ok(TtsEngine::ElevenLabs),
            other => Err(format!("unsupported TTS engine: {}", other)),
        }
    }
}

impl fmt::Display for TtsEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub const MIN_TARGET_WORDS: u32 = 500;
pub const MAX_TARGET_WORDS: u32 = 5000;

/// Everything the caller controls about one generation run.
#[derive(Debug, Clone)]
pub struct GenerationParams {
    pub target_words: u32,
    pub style: PodcastStyle,
    pub first_speaker: String,
    pub second_speaker: String,
    pub podcast_name: String,
    pub tagline: String,
    pub language: Language,
    pub tts_model: String,
    pub creativity: f32,
    pub first_speaker_voice: ChatVoice,
    pub second_speaker_voice: ChatVoice,
    pub first_speaker_premium_voice: String,
    pub second_speaker_premium_voice: String,
}

impl GenerationParams {
    pub fn validate(&self) -> Result<(), InvalidParams> {
        if self.target_words < MIN_TARGET_WORDS || self.target_words > MAX_TARGET_WORDS {
            return Err(InvalidParams::TargetWordsOutOfRange(self.target_words));
        }
        if !(0.0..=1.0).contains(&self.creativity) {
            return Err(InvalidParams::CreativityOutOfRange(self.creativity));
        }
        if self.first_speaker.trim().is_empty() {
            return Err(InvalidParams::EmptySpeakerName("firstSpeaker"));
        }
        if self.second_speaker.trim().is_empty() {
            return Err(InvalidParams::EmptySpeakerName("secondSpeaker"));
        }
        if self.podcast_name.trim().is_empty() {
            return Err(InvalidParams::EmptyPodcastName);
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InvalidParams {
    #[error("length must be between {MIN_TARGET_WORDS} and {MAX_TARGET_WORDS} words, got {0}")]
    TargetWordsOutOfRange(u32),
    #[error("creativity must be between 0.0 and 1.0, got {0}")]
    CreativityOutOfRange(f32),
    #[error("{0} must not be empty")]
    EmptySpeakerName(&'static str),
    #[error("podcastName must not be empty")]
    EmptyPodcastName,
}

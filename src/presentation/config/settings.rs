use std::str::FromStr;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub providers: ProviderSettings,
    pub generation: GenerationSettings,
    pub synthesis: SynthesisSettings,
    pub audio: AudioSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// When set, every provider is replaced by its mock so the service runs
    /// with no network access at all.
    pub offline: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSettings {
    pub openai_base_url: String,
    pub chat_model: String,
    pub chat_tts_model: String,
    pub edge_region: String,
    pub elevenlabs_base_url: String,
    pub elevenlabs_model: String,
    pub generation_timeout_secs: u64,
    pub synthesis_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationSettings {
    /// Longest source excerpt embedded in a prompt, in characters.
    pub max_content_chars: usize,
    /// Hard ceiling on completion tokens, regardless of requested length.
    pub max_response_tokens: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SynthesisSettings {
    pub chat_chunk_chars: usize,
    pub premium_turn_cap: usize,
    pub premium_turn_chars: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AudioSettings {
    /// Directory rendered files land in; also served as static files.
    pub output_dir: String,
    /// URL path prefix the directory is mounted under.
    pub public_base_path: String,
    /// Bundled fallback file, relative to `output_dir`.
    pub sample_file: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Loads settings from environment variables, with defaults suitable
    /// for local development.
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                host: env_or("PODFORGE_HOST", "0.0.0.0"),
                port: env_parse("PODFORGE_PORT", 3000),
                offline: env_flag("PODFORGE_OFFLINE"),
            },
            providers: ProviderSettings {
                openai_base_url: env_or("PODFORGE_OPENAI_BASE_URL", "https://api.openai.com/v1"),
                chat_model: env_or("PODFORGE_CHAT_MODEL", "gpt-4o-mini"),
                chat_tts_model: env_or("PODFORGE_CHAT_TTS_MODEL", "tts-1"),
                edge_region: env_or("PODFORGE_EDGE_REGION", "eastus"),
                elevenlabs_base_url: env_or(
                    "PODFORGE_ELEVENLABS_BASE_URL",
                    "https://api.elevenlabs.io",
                ),
                elevenlabs_model: env_or("PODFORGE_ELEVENLABS_MODEL", "eleven_multilingual_v2"),
                generation_timeout_secs: env_parse("PODFORGE_GENERATION_TIMEOUT_SECS", 120),
                synthesis_timeout_secs: env_parse("PODFORGE_SYNTHESIS_TIMEOUT_SECS", 60),
            },
            generation: GenerationSettings {
                max_content_chars: env_parse("PODFORGE_MAX_CONTENT_CHARS", 4000),
                max_response_tokens: env_parse("PODFORGE_MAX_RESPONSE_TOKENS", 4000),
            },
            synthesis: SynthesisSettings {
                chat_chunk_chars: env_parse("PODFORGE_CHAT_CHUNK_CHARS", 4000),
                premium_turn_cap: env_parse("PODFORGE_PREMIUM_TURN_CAP", 15),
                premium_turn_chars: env_parse("PODFORGE_PREMIUM_TURN_CHARS", 5000),
            },
            audio: AudioSettings {
                output_dir: env_or("PODFORGE_AUDIO_DIR", "public/audio"),
                public_base_path: env_or("PODFORGE_AUDIO_BASE_PATH", "/audio"),
                sample_file: env_or("PODFORGE_SAMPLE_FILE", "sample-podcast.mp3"),
            },
            logging: LoggingSettings {
                level: env_or("PODFORGE_LOG_LEVEL", "info"),
                enable_json: env_flag("PODFORGE_LOG_JSON"),
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

fn env_flag(key: &str) -> bool {
    std::env::var(key)
        .map(|value| value.to_lowercase() == "true" || value == "1")
        .unwrap_or(false)
}

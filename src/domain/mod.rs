mod content_source;
mod credentials;
mod dialogue;
mod language;
mod params;

pub use content_source::{ContentSource, SourceKind};
pub use credentials::ApiCredentials;
pub use dialogue::DialogueTurn;
pub use language::Language;
pub use params::{
    ChatVoice, GenerationParams, InvalidParams, PodcastStyle, TtsEngine, MAX_TARGET_WORDS,
    MIN_TARGET_WORDS,
};

mod dialogue_extractor;
mod example_transcripts;
mod podcast_service;
mod prompt_builder;
mod script_service;
mod synthesis_service;
mod transcript_cleaner;

pub use dialogue_extractor::extract_dialogue;
pub use example_transcripts::example_transcript;
pub use podcast_service::{AudioSource, GenerationReport, PodcastService};
pub use prompt_builder::{build_prompts, truncate_content, PromptSet};
pub use script_service::{Script, ScriptOrigin, ScriptService};
pub use synthesis_service::{
    AudioArtifact, AudioFidelity, SynthesisError, SynthesisLimits, SynthesisService,
};
pub use transcript_cleaner::{clean_transcript, strip_speech_markup};

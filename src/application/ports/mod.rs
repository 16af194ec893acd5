mod audio_store;
mod chat_speech_client;
mod cloud_speech_client;
mod premium_speech_client;
mod provider_catalog;
mod text_generator;

pub use audio_store::{AudioStore, AudioStoreError};
pub use chat_speech_client::{ChatSpeechClient, ChatSpeechError};
pub use cloud_speech_client::{CloudSpeechClient, CloudSpeechError};
pub use premium_speech_client::{PremiumSpeechClient, PremiumSpeechError};
pub use provider_catalog::ProviderCatalog;
pub use text_generator::{TextGenerator, TextGeneratorError};

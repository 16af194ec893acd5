use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::application::ports::{
    ChatSpeechClient, CloudSpeechClient, PremiumSpeechClient, ProviderCatalog, TextGenerator,
};
use crate::domain::ApiCredentials;
use crate::infrastructure::llm::OpenAiChatClient;
use crate::infrastructure::speech::{EdgeSpeechClient, ElevenLabsSpeechClient, OpenAiSpeechClient};
use crate::presentation::config::ProviderSettings;

/// Real provider catalog backed by HTTP clients.
///
/// The two underlying reqwest clients are shared across requests for
/// connection pooling; the per-request pieces are just the credentials.
pub struct HttpProviderCatalog {
    settings: ProviderSettings,
    generation_client: Client,
    synthesis_client: Client,
}

impl HttpProviderCatalog {
    pub fn new(settings: ProviderSettings) -> Result<Self, reqwest::Error> {
        let generation_client = Client::builder()
            .timeout(Duration::from_secs(settings.generation_timeout_secs))
            .build()?;
        let synthesis_client = Client::builder()
            .timeout(Duration::from_secs(settings.synthesis_timeout_secs))
            .build()?;
        Ok(Self {
            settings,
            generation_client,
            synthesis_client,
        })
    }
}

impl ProviderCatalog for HttpProviderCatalog {
    fn text_generator(&self, credentials: &ApiCredentials) -> Option<Arc<dyn TextGenerator>> {
        credentials.openai_key().map(|key| {
            Arc::new(OpenAiChatClient::new(
                self.generation_client.clone(),
                self.settings.openai_base_url.clone(),
                key.to_string(),
                self.settings.chat_model.clone(),
            )) as Arc<dyn TextGenerator>
        })
    }

    fn chat_speech(&self, credentials: &ApiCredentials) -> Option<Arc<dyn ChatSpeechClient>> {
        credentials.openai_key().map(|key| {
            Arc::new(OpenAiSpeechClient::new(
                self.synthesis_client.clone(),
                self.settings.openai_base_url.clone(),
                key.to_string(),
                self.settings.chat_tts_model.clone(),
            )) as Arc<dyn ChatSpeechClient>
        })
    }

    fn cloud_speech(&self) -> Arc<dyn CloudSpeechClient> {
        Arc::new(EdgeSpeechClient::new(
            self.synthesis_client.clone(),
            &self.settings.edge_region,
        ))
    }

    fn premium_speech(
        &self,
        credentials: &ApiCredentials,
    ) -> Option<Arc<dyn PremiumSpeechClient>> {
        credentials.elevenlabs_key().map(|key| {
            Arc::new(ElevenLabsSpeechClient::new(
                self.synthesis_client.clone(),
                self.settings.elevenlabs_base_url.clone(),
                key.to_string(),
                self.settings.elevenlabs_model.clone(),
            )) as Arc<dyn PremiumSpeechClient>
        })
    }
}

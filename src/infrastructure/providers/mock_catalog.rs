use std::sync::Arc;

use crate::application::ports::{
    ChatSpeechClient, CloudSpeechClient, PremiumSpeechClient, ProviderCatalog, TextGenerator,
};
use crate::domain::ApiCredentials;
use crate::infrastructure::llm::MockTextGenerator;
use crate::infrastructure::speech::{
    MockChatSpeechClient, MockCloudSpeechClient, MockPremiumSpeechClient,
};

/// Catalog of mock providers. Credential gating mirrors the real catalog so
/// missing-key paths behave the same in tests and offline runs.
pub struct MockProviderCatalog;

impl ProviderCatalog for MockProviderCatalog {
    fn text_generator(&self, credentials: &ApiCredentials) -> Option<Arc<dyn TextGenerator>> {
        credentials
            .openai_key()
            .map(|_| Arc::new(MockTextGenerator) as Arc<dyn TextGenerator>)
    }

    fn chat_speech(&self, credentials: &ApiCredentials) -> Option<Arc<dyn ChatSpeechClient>> {
        credentials
            .openai_key()
            .map(|_| Arc::new(MockChatSpeechClient) as Arc<dyn ChatSpeechClient>)
    }

    fn cloud_speech(&self) -> Arc<dyn CloudSpeechClient> {
        Arc::new(MockCloudSpeechClient)
    }

    fn premium_speech(
        &self,
        credentials: &ApiCredentials,
    ) -> Option<Arc<dyn PremiumSpeechClient>> {
        credentials
            .elevenlabs_key()
            .map(|_| Arc::new(MockPremiumSpeechClient) as Arc<dyn PremiumSpeechClient>)
    }
}

use std::sync::Arc;

use crate::domain::ApiCredentials;

use super::{ChatSpeechClient, CloudSpeechClient, PremiumSpeechClient, TextGenerator};

/// Builds provider clients from the credentials carried by one request.
///
/// Clients are constructed per request, so no provider state outlives the
/// request that supplied its key. `None` means the required credential is
/// absent. The cloud-voice provider needs no key and is always available.
pub trait ProviderCatalog: Send + Sync {
    fn text_generator(&self, credentials: &ApiCredentials) -> Option<Arc<dyn TextGenerator>>;

    fn chat_speech(&self, credentials: &ApiCredentials) -> Option<Arc<dyn ChatSpeechClient>>;

    fn cloud_speech(&self) -> Arc<dyn CloudSpeechClient>;

    fn premium_speech(&self, credentials: &ApiCredentials)
        -> Option<Arc<dyn PremiumSpeechClient>>;
}

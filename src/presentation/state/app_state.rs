use std::sync::Arc;

use crate::application::ports::ProviderCatalog;
use crate::application::services::PodcastService;
use crate::presentation::config::Settings;

pub struct AppState<Cat: ProviderCatalog> {
    pub podcast_service: Arc<PodcastService<Cat>>,
    pub settings: Settings,
}

impl<Cat: ProviderCatalog> Clone for AppState<Cat> {
    fn clone(&self) -> Self {
        Self {
            podcast_service: Arc::clone(&self.podcast_service),
            settings: self.settings.clone(),
        }
    }
}

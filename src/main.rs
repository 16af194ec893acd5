use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;

use podforge::application::ports::{AudioStore, ProviderCatalog};
use podforge::application::services::{
    PodcastService, ScriptService, SynthesisLimits, SynthesisService,
};
use podforge::infrastructure::observability::init_tracing;
use podforge::infrastructure::providers::{HttpProviderCatalog, MockProviderCatalog};
use podforge::infrastructure::storage::LocalAudioStore;
use podforge::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();
    let environment: Environment = std::env::var("PODFORGE_ENV")
        .unwrap_or_else(|_| "local".to_string())
        .parse()
        .map_err(anyhow::Error::msg)?;

    init_tracing(&settings.logging, environment, settings.server.port);

    if settings.server.offline {
        tracing::warn!("Offline mode enabled, all speech and text providers are mocked");
        run(settings, Arc::new(MockProviderCatalog)).await
    } else {
        let catalog = HttpProviderCatalog::new(settings.providers.clone())?;
        run(settings, Arc::new(catalog)).await
    }
}

async fn run<Cat>(settings: Settings, catalog: Arc<Cat>) -> anyhow::Result<()>
where
    Cat: ProviderCatalog + 'static,
{
    let audio_store: Arc<dyn AudioStore> = Arc::new(LocalAudioStore::new(
        PathBuf::from(&settings.audio.output_dir),
        settings.audio.public_base_path.clone(),
    )?);

    if audio_store.head(&settings.audio.sample_file).await.is_err() {
        tracing::warn!(
            file = %settings.audio.sample_file,
            dir = %settings.audio.output_dir,
            "Sample fallback audio not found, failed generations will return a dead link"
        );
    }

    let script_service = ScriptService::new(
        settings.generation.max_content_chars,
        settings.generation.max_response_tokens,
    );
    let synthesis_service = SynthesisService::new(
        Arc::clone(&audio_store),
        SynthesisLimits {
            chat_chunk_chars: settings.synthesis.chat_chunk_chars,
            premium_turn_cap: settings.synthesis.premium_turn_cap,
            premium_turn_chars: settings.synthesis.premium_turn_chars,
        },
    );
    let sample_audio_path = format!(
        "{}/{}",
        settings.audio.public_base_path.trim_end_matches('/'),
        settings.audio.sample_file
    );
    let podcast_service = Arc::new(PodcastService::new(
        catalog,
        script_service,
        synthesis_service,
        sample_audio_path,
    ));

    let addr = SocketAddr::from((settings.server.host.parse::<IpAddr>()?, settings.server.port));

    let state = AppState {
        podcast_service,
        settings,
    };
    let router = create_router(state);

    tracing::info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

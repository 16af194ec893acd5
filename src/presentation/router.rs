use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::ProviderCatalog;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{generate_handler, health_handler};
use crate::presentation::state::AppState;

pub fn create_router<Cat>(state: AppState<Cat>) -> Router
where
    Cat: ProviderCatalog + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let audio_route = state.settings.audio.public_base_path.clone();
    let audio_files = ServeDir::new(&state.settings.audio.output_dir);

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/generate", post(generate_handler::<Cat>))
        .nest_service(&audio_route, audio_files)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::ports::ProviderCatalog;
use crate::domain::{
    ApiCredentials, ChatVoice, ContentSource, GenerationParams, Language, PodcastStyle,
    SourceKind,
};
use crate::infrastructure::observability::preview_content;
use crate::presentation::state::AppState;

/// Premade premium voices used when the caller picks none ("Adam" and
/// "Rachel").
const DEFAULT_PREMIUM_FIRST_VOICE: &str = "pNInz6obpgDQGcFmaJgB";
const DEFAULT_PREMIUM_SECOND_VOICE: &str = "21m00Tcm4TlvDq8ikWAM";

#[derive(Deserialize)]
pub struct GenerateRequest {
    pub source: Option<SourcePayload>,
    pub params: Option<ParamsPayload>,
    #[serde(rename = "apiConfig", default)]
    pub api_config: ApiConfigPayload,
}

#[derive(Deserialize)]
pub struct SourcePayload {
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamsPayload {
    pub length: u32,
    pub style: String,
    pub first_speaker: String,
    pub second_speaker: String,
    pub podcast_name: String,
    #[serde(default)]
    pub tagline: String,
    pub language: String,
    pub tts_model: String,
    pub creativity: f32,
    #[serde(default)]
    pub first_speaker_voice: Option<String>,
    #[serde(default)]
    pub second_speaker_voice: Option<String>,
    #[serde(default)]
    pub first_speaker_eleven_labs_voice_id: Option<String>,
    #[serde(default)]
    pub second_speaker_eleven_labs_voice_id: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct ApiConfigPayload {
    pub openai: Option<String>,
    pub gemini: Option<String>,
    pub elevenlabs: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    pub transcript: String,
    pub audio_url: String,
    pub audio_source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub error: Option<String>,
    pub duration: u32,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn generate_handler<Cat>(
    State(state): State<AppState<Cat>>,
    Json(request): Json<GenerateRequest>,
) -> impl IntoResponse
where
    Cat: ProviderCatalog + 'static,
{
    let Some(source_payload) = request.source else {
        return bad_request("the source field is required");
    };
    let Some(params_payload) = request.params else {
        return bad_request("the params field is required");
    };

    let source = match build_source(source_payload) {
        Ok(source) => source,
        Err(message) => return bad_request(&message),
    };
    let params = match build_params(params_payload) {
        Ok(params) => params,
        Err(message) => return bad_request(&message),
    };
    let credentials = build_credentials(request.api_config);

    tracing::debug!(
        kind = %source.kind,
        content = %preview_content(&source.content),
        engine = %params.tts_model,
        language = %params.language,
        "Generating podcast"
    );

    let report = state
        .podcast_service
        .generate(&source, &params, &credentials)
        .await;

    tracing::info!(
        success = report.success,
        audio_source = report.audio_source.as_str(),
        "Generation finished"
    );

    (
        StatusCode::OK,
        Json(GenerateResponse {
            success: report.success,
            transcript: report.transcript,
            audio_url: report.audio_url,
            audio_source: report.audio_source.as_str(),
            note: report.note,
            error: report.error,
            duration: report.duration_seconds,
        }),
    )
        .into_response()
}

fn build_source(payload: SourcePayload) -> Result<ContentSource, String> {
    let kind: SourceKind = payload.kind.parse()?;
    if payload.content.trim().is_empty() {
        return Err("source content must not be empty".to_string());
    }
    Ok(ContentSource::new(kind, payload.content))
}

fn build_params(payload: ParamsPayload) -> Result<GenerationParams, String> {
    let style: PodcastStyle = payload.style.parse()?;
    let language: Language = payload.language.parse()?;

    let params = GenerationParams {
        target_words: payload.length,
        style,
        first_speaker: payload.first_speaker,
        second_speaker: payload.second_speaker,
        podcast_name: payload.podcast_name,
        tagline: payload.tagline,
        language,
        tts_model: payload.tts_model,
        creativity: payload.creativity,
        first_speaker_voice: parse_chat_voice(
            payload.first_speaker_voice.as_deref(),
            ChatVoice::Nova,
        ),
        second_speaker_voice: parse_chat_voice(
            payload.second_speaker_voice.as_deref(),
            ChatVoice::Echo,
        ),
        first_speaker_premium_voice: payload
            .first_speaker_eleven_labs_voice_id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PREMIUM_FIRST_VOICE.to_string()),
        second_speaker_premium_voice: payload
            .second_speaker_eleven_labs_voice_id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PREMIUM_SECOND_VOICE.to_string()),
    };

    params.validate().map_err(|e| e.to_string())?;
    Ok(params)
}

/// Unknown chat voices degrade to the field default rather than failing the
/// request.
fn parse_chat_voice(value: Option<&str>, default: ChatVoice) -> ChatVoice {
    match value {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(voice = raw, "Unknown chat voice, substituting the default");
            default
        }),
        None => default,
    }
}

fn build_credentials(payload: ApiConfigPayload) -> ApiCredentials {
    ApiCredentials {
        openai: payload.openai,
        gemini: payload.gemini,
        elevenlabs: payload.elevenlabs,
    }
}

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

use std::collections::VecDeque;
use std::sync::Mutex;

use podforge::application::ports::{TextGenerator, TextGeneratorError};
use podforge::application::services::{ScriptOrigin, ScriptService, example_transcript};
use podforge::domain::{
    ChatVoice, ContentSource, GenerationParams, Language, PodcastStyle, SourceKind,
};

struct RecordedCall {
    user: String,
    temperature: f32,
    max_tokens: u32,
}

/// Generator that replays scripted responses and records every call.
struct RecordingGenerator {
    responses: Mutex<VecDeque<Result<String, TextGeneratorError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingGenerator {
    fn with_responses(responses: Vec<Result<String, TextGeneratorError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl TextGenerator for RecordingGenerator {
    async fn complete(
        &self,
        _system_prompt: &str,
        user_prompt: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, TextGeneratorError> {
        self.calls.lock().unwrap().push(RecordedCall {
            user: user_prompt.to_string(),
            temperature,
            max_tokens,
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted response left")
    }
}

fn test_params() -> GenerationParams {
    GenerationParams {
        target_words: 800,
        style: PodcastStyle::Conversational,
        first_speaker: "Host".to_string(),
        second_speaker: "Expert".to_string(),
        podcast_name: "Deep Currents".to_string(),
        tagline: "ideas worth hearing".to_string(),
        language: Language::English,
        tts_model: "edge".to_string(),
        creativity: 0.4,
        first_speaker_voice: ChatVoice::Onyx,
        second_speaker_voice: ChatVoice::Nova,
        first_speaker_premium_voice: "voice-one".to_string(),
        second_speaker_premium_voice: "voice-two".to_string(),
    }
}

fn test_source(content: &str) -> ContentSource {
    ContentSource::new(SourceKind::Text, content)
}

#[tokio::test]
async fn given_no_generator_when_generating_then_example_script_is_used() {
    let service = ScriptService::new(4000, 4000);
    let params = test_params();

    let script = service
        .generate(&test_source("anything"), &params, None)
        .await;

    assert_eq!(script.origin, ScriptOrigin::Example);
    assert_eq!(script.text, example_transcript(Language::English, &params));
}

#[tokio::test]
async fn given_successful_completion_when_generating_then_script_is_generated() {
    let service = ScriptService::new(4000, 4000);
    let generator = RecordingGenerator::with_responses(vec![Ok(
        "<Person1>A fresh script.</Person1>".to_string()
    )]);

    let script = service
        .generate(&test_source("topic"), &test_params(), Some(&generator))
        .await;

    assert_eq!(script.origin, ScriptOrigin::Generated);
    assert_eq!(script.text, "<Person1>A fresh script.</Person1>");
    assert_eq!(generator.call_count(), 1);
}

#[tokio::test]
async fn given_creativity_and_length_when_generating_then_they_reach_the_provider() {
    let service = ScriptService::new(4000, 4000);
    let generator = RecordingGenerator::with_responses(vec![Ok("script".to_string())]);

    service
        .generate(&test_source("topic"), &test_params(), Some(&generator))
        .await;

    let calls = generator.calls.lock().unwrap();
    assert_eq!(calls[0].temperature, 0.4);
    assert_eq!(calls[0].max_tokens, 3200);
}

#[tokio::test]
async fn given_large_target_length_when_generating_then_token_ceiling_applies() {
    let service = ScriptService::new(4000, 4000);
    let generator = RecordingGenerator::with_responses(vec![Ok("script".to_string())]);

    let mut params = test_params();
    params.target_words = 1500;

    service
        .generate(&test_source("topic"), &params, Some(&generator))
        .await;

    let calls = generator.calls.lock().unwrap();
    assert_eq!(calls[0].max_tokens, 4000);
}

#[tokio::test]
async fn given_oversized_content_when_generating_then_prompt_carries_an_excerpt() {
    let service = ScriptService::new(100, 4000);
    let generator = RecordingGenerator::with_responses(vec![Ok("script".to_string())]);

    let content = "x".repeat(150);
    service
        .generate(&test_source(&content), &test_params(), Some(&generator))
        .await;

    let calls = generator.calls.lock().unwrap();
    assert!(calls[0].user.contains(&format!("{}...", "x".repeat(100))));
    assert!(!calls[0].user.contains(&"x".repeat(101)));
}

#[tokio::test]
async fn given_context_length_error_when_generating_then_retries_with_smaller_excerpt() {
    let service = ScriptService::new(100, 4000);
    let generator = RecordingGenerator::with_responses(vec![
        Err(TextGeneratorError::ContextLength("too long".to_string())),
        Ok("<Person1>Short enough now.</Person1>".to_string()),
    ]);

    let content = "x".repeat(150);
    let script = service
        .generate(&test_source(&content), &test_params(), Some(&generator))
        .await;

    assert_eq!(script.origin, ScriptOrigin::Generated);
    let calls = generator.calls.lock().unwrap();
    assert_eq!(calls.len(), 2);
    assert!(calls[1].user.contains(&format!("{}...", "x".repeat(50))));
    assert!(!calls[1].user.contains(&"x".repeat(51)));
}

#[tokio::test]
async fn given_repeated_context_errors_when_generating_then_example_script_is_used() {
    let service = ScriptService::new(100, 4000);
    let generator = RecordingGenerator::with_responses(vec![
        Err(TextGeneratorError::ContextLength("too long".to_string())),
        Err(TextGeneratorError::ContextLength("still too long".to_string())),
    ]);

    let params = test_params();
    let script = service
        .generate(&test_source("topic"), &params, Some(&generator))
        .await;

    assert_eq!(script.origin, ScriptOrigin::Example);
    assert_eq!(generator.call_count(), 2);
}

#[tokio::test]
async fn given_provider_failure_when_generating_then_example_script_is_used() {
    let service = ScriptService::new(4000, 4000);
    let generator = RecordingGenerator::with_responses(vec![Err(
        TextGeneratorError::ApiRequestFailed("boom".to_string()),
    )]);

    let params = test_params();
    let script = service
        .generate(&test_source("topic"), &params, Some(&generator))
        .await;

    assert_eq!(script.origin, ScriptOrigin::Example);
    assert_eq!(script.text, example_transcript(Language::English, &params));
    assert_eq!(generator.call_count(), 1);
}

#[tokio::test]
async fn given_empty_completion_when_generating_then_example_script_is_used() {
    let service = ScriptService::new(4000, 4000);
    let generator = RecordingGenerator::with_responses(vec![Ok("   ".to_string())]);

    let script = service
        .generate(&test_source("topic"), &test_params(), Some(&generator))
        .await;

    assert_eq!(script.origin, ScriptOrigin::Example);
    assert_eq!(generator.call_count(), 1);
}

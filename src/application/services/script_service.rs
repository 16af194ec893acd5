use crate::application::ports::{TextGenerator, TextGeneratorError};
use crate::domain::{ContentSource, GenerationParams};

use super::example_transcripts::example_transcript;
use super::prompt_builder::{build_prompts, truncate_content};

/// Where a script came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptOrigin {
    Generated,
    Example,
}

#[derive(Debug, Clone)]
pub struct Script {
    pub text: String,
    pub origin: ScriptOrigin,
}

/// Writes the podcast script, falling back to a canned example whenever the
/// text-generation provider is absent or fails. This stage never errors: a
/// script always comes out.
pub struct ScriptService {
    max_content_chars: usize,
    max_response_tokens: u32,
}

impl ScriptService {
    pub fn new(max_content_chars: usize, max_response_tokens: u32) -> Self {
        Self {
            max_content_chars,
            max_response_tokens,
        }
    }

    #[tracing::instrument(skip(self, source, params, generator), fields(language = %params.language))]
    pub async fn generate(
        &self,
        source: &ContentSource,
        params: &GenerationParams,
        generator: Option<&dyn TextGenerator>,
    ) -> Script {
        let Some(generator) = generator else {
            tracing::info!("No text-generation credential supplied, using example script");
            return self.example(params);
        };

        // Word-to-token estimate: roughly four tokens per word.
        let max_tokens = self
            .max_response_tokens
            .min(params.target_words.saturating_mul(4));
        let mut content_bound = self.max_content_chars;

        for attempt in 0..2 {
            let excerpt = truncate_content(&source.content, content_bound);
            let prompts = build_prompts(&excerpt, params);

            match generator
                .complete(&prompts.system, &prompts.user, params.creativity, max_tokens)
                .await
            {
                Ok(text) if !text.trim().is_empty() => {
                    tracing::info!(chars = text.len(), attempt, "Script generated");
                    return Script {
                        text,
                        origin: ScriptOrigin::Generated,
                    };
                }
                Ok(_) => {
                    tracing::warn!("Provider returned an empty script, using example");
                    break;
                }
                Err(TextGeneratorError::ContextLength(detail)) if attempt == 0 => {
                    content_bound /= 2;
                    tracing::warn!(
                        new_bound = content_bound,
                        detail = %detail,
                        "Prompt exceeded the context window, retrying with a smaller excerpt"
                    );
                }
                Err(error) => {
                    tracing::warn!(error = %error, "Script generation failed, using example");
                    break;
                }
            }
        }

        self.example(params)
    }

    fn example(&self, params: &GenerationParams) -> Script {
        Script {
            text: example_transcript(params.language, params),
            origin: ScriptOrigin::Example,
        }
    }
}

use crate::application::ports::{TextGenerator, TextGeneratorError};

/// Deterministic generator for tests and offline runs. Emits a short,
/// well-tagged two-speaker script.
pub struct MockTextGenerator;

#[async_trait::async_trait]
impl TextGenerator for MockTextGenerator {
    async fn complete(
        &self,
        _system_prompt: &str,
        _user_prompt: &str,
        _temperature: f32,
        _max_tokens: u32,
    ) -> Result<String, TextGeneratorError> {
        Ok("<Person1>Welcome to the show.</Person1>\n\
            <Person2>Glad to be here, let's dive in.</Person2>\n\
            <Person1>First, the big picture.</Person1>\n\
            <Person2>And then the details.</Person2>"
            .to_string())
    }
}

/// Provider API keys supplied with a single request.
///
/// Keys are held only for the lifetime of the request that carried them and
/// must never appear in logs.
#[derive(Debug, Clone, Default)]
pub struct ApiCredentials {
    pub openai: Option<String>,
    pub gemini: Option<String>,
    pub elevenlabs: Option<String>,
}

impl ApiCredentials {
    /// OpenAI key, treating blank strings as absent.
    pub fn openai_key(&self) -> Option<&str> {
        self.openai.as_deref().filter(|key| !key.trim().is_empty())
    }

    /// ElevenLabs key, treating blank strings as absent.
    pub fn elevenlabs_key(&self) -> Option<&str> {
        self.elevenlabs
            .as_deref()
            .filter(|key| !key.trim().is_empty())
    }
}

/// One spoken unit of the podcast, in playback order.
///
/// `voice_selector` is an engine-appropriate identifier: a chat voice name,
/// a neural voice name, or a premium voice id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueTurn {
    pub speaker: String,
    pub text: String,
    pub voice_selector: String,
}

impl DialogueTurn {
    pub fn new(
        speaker: impl Into<String>,
        text: impl Into<String>,
        voice_selector: impl Into<String>,
    ) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
            voice_selector: voice_selector.into(),
        }
    }
}

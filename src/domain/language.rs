use std::fmt;
use std::str::FromStr;

/// Target language of the generated podcast script and audio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    French,
    English,
    Spanish,
    German,
    Italian,
    Portuguese,
    Dutch,
    Russian,
    Chinese,
    Japanese,
}

impl Language {
    /// Two-letter code used on the wire.
    pub fn code(&self) -> &'static str {
        match self {
            Language::French => "fr",
            Language::English => "en",
            Language::Spanish => "es",
            Language::German => "de",
            Language::Italian => "it",
            Language::Portuguese => "pt",
            Language::Dutch => "nl",
            Language::Russian => "ru",
            Language::Chinese => "zh",
            Language::Japanese => "ja",
        }
    }

    /// English display name, used when building prompts from the English
    /// template base.
    pub fn english_name(&self) -> &'static str {
        match self {
            Language::French => "French",
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::German => "German",
            Language::Italian => "Italian",
            Language::Portuguese => "Portuguese",
            Language::Dutch => "Dutch",
            Language::Russian => "Russian",
            Language::Chinese => "Chinese",
            Language::Japanese => "Japanese",
        }
    }

    /// Locale tag expected by the free cloud-voice provider.
    pub fn locale(&self) -> &'static str {
        match self {
            Language::French => "fr-FR",
            Language::English => "en-US",
            Language::Spanish => "es-ES",
            Language::German => "de-DE",
            Language::Italian => "it-IT",
            Language::Portuguese => "pt-BR",
            Language::Dutch => "nl-NL",
            Language::Russian => "ru-RU",
            Language::Chinese => "zh-CN",
            Language::Japanese => "ja-JP",
        }
    }

    /// Neural voice pair for the free cloud-voice provider, ordered as
    /// (first speaker, second speaker).
    pub fn neural_voice_pair(&self) -> (&'static str, &'static str) {
        match self {
            Language::French => ("fr-FR-HenriNeural", "fr-FR-DeniseNeural"),
            Language::English => ("en-US-GuyNeural", "en-US-JennyNeural"),
            Language::Spanish => ("es-ES-AlvaroNeural", "es-ES-ElviraNeural"),
            Language::German => ("de-DE-ConradNeural", "de-DE-KatjaNeural"),
            Language::Italian => ("it-IT-DiegoNeural", "it-IT-ElsaNeural"),
            Language::Portuguese => ("pt-BR-AntonioNeural", "pt-BR-FranciscaNeural"),
            Language::Dutch => ("nl-NL-MaartenNeural", "nl-NL-ColetteNeural"),
            Language::Russian => ("ru-RU-DmitryNeural", "ru-RU-SvetlanaNeural"),
            Language::Chinese => ("zh-CN-YunxiNeural", "zh-CN-XiaoxiaoNeural"),
            Language::Japanese => ("ja-JP-KeitaNeural", "ja-JP-NanamiNeural"),
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "fr" => Ok(Language::French),
            "en" => Ok(Language::English),
            "es" => Ok(Language::Spanish),
            "de" => Ok(Language::German),
            "it" => Ok(Language::Italian),
            "pt" => Ok(Language::Portuguese),
            "nl" => Ok(Language::Dutch),
            "ru" => Ok(Language::Russian),
            "zh" => Ok(Language::Chinese),
            "ja" => Ok(Language::Japanese),
            other => Err(format!("unsupported language: {}", other)),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

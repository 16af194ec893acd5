mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AudioSettings, GenerationSettings, LoggingSettings, ProviderSettings, ServerSettings,
    Settings, SynthesisSettings,
};

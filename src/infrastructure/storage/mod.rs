mod local_audio_store;
mod mock_audio_store;

pub use local_audio_store::LocalAudioStore;
pub use mock_audio_store::MockAudioStore;

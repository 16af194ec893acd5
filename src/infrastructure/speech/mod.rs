mod edge_speech_client;
mod elevenlabs_speech_client;
mod mock_speech_clients;
mod openai_speech_client;

pub use edge_speech_client::EdgeSpeechClient;
pub use elevenlabs_speech_client::ElevenLabsSpeechClient;
pub use mock_speech_clients::{MockChatSpeechClient, MockCloudSpeechClient, MockPremiumSpeechClient};
pub use openai_speech_client::OpenAiSpeechClient;

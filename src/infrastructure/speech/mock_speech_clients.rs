use async_trait::async_trait;
use bytes::Bytes;

use crate::application::ports::{
    ChatSpeechClient, ChatSpeechError, CloudSpeechClient, CloudSpeechError, PremiumSpeechClient,
    PremiumSpeechError,
};
use crate::domain::ChatVoice;

pub struct MockChatSpeechClient;

#[async_trait]
impl ChatSpeechClient for MockChatSpeechClient {
    async fn speak(&self, _voice: ChatVoice, _text: &str) -> Result<Bytes, ChatSpeechError> {
        Ok(Bytes::from_static(b"chat-audio"))
    }
}

pub struct MockCloudSpeechClient;

#[async_trait]
impl CloudSpeechClient for MockCloudSpeechClient {
    async fn speak_ssml(&self, _ssml: &str, _voice: &str) -> Result<Bytes, CloudSpeechError> {
        Ok(Bytes::from_static(b"cloud-audio"))
    }
}

pub struct MockPremiumSpeechClient;

#[async_trait]
impl PremiumSpeechClient for MockPremiumSpeechClient {
    async fn verify_credentials(&self) -> Result<(), PremiumSpeechError> {
        Ok(())
    }

    async fn synthesize(&self, _voice_id: &str, _text: &str) -> Result<Bytes, PremiumSpeechError> {
        Ok(Bytes::from_static(b"premium-audio"))
    }
}

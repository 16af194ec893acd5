mod mock_text_generator;
mod openai_chat_client;

pub use mock_text_generator::MockTextGenerator;
pub use openai_chat_client::OpenAiChatClient;

pub mod bedrock;
pub mod gemini;
pub mod models;

pub use bedrock::BedrockChatClient;
pub use gemini::{ChatSession, GeminiClient};
pub use models::{ChatMessage, ConversationMemory};

use anyhow::Result;
use catalog_core::config::Config;
use catalog_core::logging;
use llm::{BedrockChatClient, ConversationMemory};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();
    let config = Config::load_from_env()?;

    let client = BedrockChatClient::from_env(config.bedrock.with_env_overrides()).await?;

    let mut memory = ConversationMemory::new();
    memory.add_user_message(
        "You will act as a principal software engineer and answer software engineering questions.",
    );
    memory.add_ai_message(
        "I am a principal software engineer and will answer your software engineering questions.",
    );

    for question in [
        "What is the best programming language?",
        "What programming languages do you use?",
    ] {
        println!("> {question}");
        let reply = client.predict(&mut memory, question).await?;
        println!("{reply}");
    }

    Ok(())
}

use anyhow::Result;
use catalog_core::config::Config;
use catalog_core::logging;
use llm::GeminiClient;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();
    let config = Config::load_from_env()?;

    let client = GeminiClient::from_env(config.gemini.with_env_overrides())?;

    let answer = client
        .generate_content("What is the capital of France?")
        .await?;
    println!("{answer}");

    let mut chat = client.start_chat();
    for inquiry in ["What should I eat for breakfast?", "What about lunch?"] {
        println!("> {inquiry}");
        println!("{}", chat.send_message(inquiry).await?);
    }

    Ok(())
}

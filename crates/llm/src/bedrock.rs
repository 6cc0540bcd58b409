use crate::models::{ChatMessage, ConversationMemory};
use anyhow::{Context, Result};
use aws_config::timeout::TimeoutConfig;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_bedrockruntime::config::Credentials;
use aws_sdk_bedrockruntime::error::DisplayErrorContext;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message,
};
use aws_sdk_bedrockruntime::Client;
use catalog_core::config::BedrockConfig;
use catalog_core::AwsEnvCredentials;
use log::{error, info};
use std::time::Duration;

/// Conversational client over the Bedrock runtime's Converse API. Each call
/// replays the full memory, so context survives across turns without any
/// state on the service side.
pub struct BedrockChatClient {
    client: Client,
    config: BedrockConfig,
}

impl BedrockChatClient {
    /// Builds the client from the environment-supplied credentials. Fails
    /// before any network activity when a variable is missing.
    pub async fn from_env(config: BedrockConfig) -> Result<Self> {
        let credentials = AwsEnvCredentials::from_env()?;
        info!(
            "Initializing Bedrock chat client for region {}",
            credentials.region
        );

        let aws_config = aws_config::defaults(BehaviorVersion::latest())
            .credentials_provider(Credentials::new(
                credentials.access_key,
                credentials.secret_key,
                None,
                None,
                "environment",
            ))
            .region(Region::new(credentials.region))
            .timeout_config(
                TimeoutConfig::builder()
                    .operation_timeout(Duration::from_secs(config.timeout_secs))
                    .build(),
            )
            .load()
            .await;

        Ok(Self {
            client: Client::new(&aws_config),
            config,
        })
    }

    /// Appends `input` to the memory, asks the model, records the reply in
    /// the memory and returns it.
    pub async fn predict(&self, memory: &mut ConversationMemory, input: &str) -> Result<String> {
        memory.add_user_message(input);
        let reply = self.converse(memory).await?;
        memory.add_ai_message(reply.clone());
        Ok(reply)
    }

    /// One full-history completion, with bounded retry and exponential
    /// backoff on transient faults.
    pub async fn converse(&self, memory: &ConversationMemory) -> Result<String> {
        let mut attempt = 0;
        let mut last_error = None;

        while attempt <= self.config.max_retries {
            match self.try_converse(memory).await {
                Ok(text) => return Ok(text),
                Err(e) => {
                    last_error = Some(e);
                    attempt += 1;

                    if attempt <= self.config.max_retries {
                        let delay = Duration::from_millis(1000 * (2_u64.pow(attempt - 1)));
                        tokio::time::sleep(delay).await;
                    }
                }
            }
        }

        Err(last_error.unwrap())
    }

    async fn try_converse(&self, memory: &ConversationMemory) -> Result<String> {
        let messages = convert_to_bedrock_messages(memory.messages())?;

        info!("Sending request to Bedrock model: {}", self.config.model_id);
        let response = self
            .client
            .converse()
            .model_id(&self.config.model_id)
            .inference_config(
                InferenceConfiguration::builder()
                    .max_tokens(self.config.max_tokens as i32)
                    .temperature(self.config.temperature)
                    .build(),
            )
            .set_messages(Some(messages))
            .send()
            .await
            .map_err(|e| {
                error!("Bedrock converse error: {}", DisplayErrorContext(&e));
                anyhow::anyhow!("Failed to send request to Bedrock: {e}")
            })?;

        let output = response
            .output()
            .ok_or_else(|| anyhow::anyhow!("Bedrock response carried no output"))?;
        let message = output
            .as_message()
            .map_err(|_| anyhow::anyhow!("Bedrock response output was not a message"))?;

        let text = message
            .content()
            .iter()
            .filter_map(|block| block.as_text().ok().map(|t| t.as_str()))
            .collect::<Vec<_>>()
            .join("");
        Ok(text)
    }
}

fn convert_to_bedrock_messages(messages: &[ChatMessage]) -> Result<Vec<Message>> {
    let mut bedrock_messages = Vec::new();

    for msg in messages {
        let role = match msg.role.as_str() {
            "user" => ConversationRole::User,
            "assistant" => ConversationRole::Assistant,
            _ => continue,
        };

        let bedrock_message = Message::builder()
            .role(role)
            .content(ContentBlock::Text(msg.content.clone()))
            .build()
            .context("Failed to build Bedrock message")?;

        bedrock_messages.push(bedrock_message);
    }

    Ok(bedrock_messages)
}

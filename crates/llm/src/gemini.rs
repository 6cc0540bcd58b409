use anyhow::{Context, Result};
use catalog_core::config::{gemini_api_key_from_env, GeminiConfig};
use log::{error, info};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One turn of Gemini content: a role plus text parts. Role is `user` or
/// `model` on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part { text: text.into() }],
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Some("model".to_string()),
            parts: vec![Part { text: text.into() }],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: &'a [Content],
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Client for the Generative Language API. The API key comes from the
/// process environment at construction time and travels in a header, never
/// in the URL.
pub struct GeminiClient {
    config: GeminiConfig,
    api_key: String,
    client: Client,
}

impl GeminiClient {
    pub fn from_env(config: GeminiConfig) -> Result<Self> {
        let api_key = gemini_api_key_from_env()?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            config,
            api_key,
            client,
        })
    }

    /// One-shot generation from a single prompt.
    pub async fn generate_content(&self, inquiry: &str) -> Result<String> {
        self.generate(&[Content::user(inquiry)]).await
    }

    /// Opens a chat whose history is replayed on every message.
    pub fn start_chat(&self) -> ChatSession<'_> {
        ChatSession {
            client: self,
            history: Vec::new(),
        }
    }

    async fn generate(&self, contents: &[Content]) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        );

        info!("Sending request to Gemini model: {}", self.config.model);
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&GenerateContentRequest { contents })
            .send()
            .await
            .context("Failed to send request to Gemini API")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Gemini API returned error {status}: {error_text}");
            return Err(anyhow::anyhow!(
                "Gemini API returned error {}: {}",
                status,
                error_text
            ));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to parse Gemini API response")?;
        extract_text(&body)
    }
}

fn extract_text(response: &GenerateContentResponse) -> Result<String> {
    let candidate = response
        .candidates
        .first()
        .ok_or_else(|| anyhow::anyhow!("Gemini response carried no candidates"))?;
    let content = candidate
        .content
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("Gemini candidate carried no content"))?;

    Ok(content
        .parts
        .iter()
        .map(|part| part.text.as_str())
        .collect::<Vec<_>>()
        .join(""))
}

/// An in-progress chat: user and model turns accumulate locally and the full
/// history rides along with every request.
pub struct ChatSession<'a> {
    client: &'a GeminiClient,
    history: Vec<Content>,
}

impl ChatSession<'_> {
    pub async fn send_message(&mut self, text: &str) -> Result<String> {
        self.history.push(Content::user(text));
        let reply = self.client.generate(&self.history).await?;
        self.history.push(Content::model(reply.clone()));
        Ok(reply)
    }

    pub fn history(&self) -> &[Content] {
        &self.history
    }
}

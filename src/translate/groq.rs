use anyhow::{anyhow, Context};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::interface::CompletionBackend;
use crate::config::GroqConfig;

/// Chat-completions client for Groq's OpenAI-compatible API.
pub struct GroqClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    content: String,
}

impl GroqClient {
    /// `api_key` is required here: callers without a key never construct
    /// a client, so the missing-credential case is handled upstream.
    pub fn new(config: &GroqConfig, api_key: String) -> Self {
        info!(
            "Initialized GroqClient: model={}, base_url={}",
            config.model, config.base_url
        );
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            api_key,
        }
    }
}

#[async_trait]
impl CompletionBackend for GroqClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, anyhow::Error> {
        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                Message {
                    role: "system",
                    content: system,
                },
                Message {
                    role: "user",
                    content: user,
                },
            ],
        };

        debug!("Dispatching completion request to {}", url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("request to completion service failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("completion service returned {status}: {body}"));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .context("completion service returned a malformed response")?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("completion service returned no choices"))?;

        Ok(choice.message.content)
    }
}

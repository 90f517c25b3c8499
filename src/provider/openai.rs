use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::ChatProvider;
use crate::error::Error;

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4";

// OpenAI chat completions request format
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

// Only the parts of the reply we read
#[derive(Deserialize, Clone, Debug)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct Choice {
    pub message: ReplyMessage,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ReplyMessage {
    pub content: Option<String>,
}

pub struct OpenAiProvider {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl OpenAiProvider {
    pub fn new(api_base: &str, api_key: &str, model: &str) -> Self {
        Self {
            // no timeout: the client's defaults apply
            client: reqwest::Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_request(&self, system_prompt: &str, user_prompt: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_prompt.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_prompt.to_string(),
                },
            ],
        }
    }
}

#[async_trait]
impl ChatProvider for OpenAiProvider {
    async fn chat(&self, system_prompt: &str, user_prompt: &str) -> Result<String, Error> {
        let request = self.build_request(system_prompt, user_prompt);
        debug!(model = %self.model, "Sending chat completion request");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(status = status.as_u16(), "Provider rejected request");
            return Err(Error::Provider(format!(
                "Error code: {} - {}",
                status.as_u16(),
                body
            )));
        }

        let body: ChatResponse = response.json().await?;

        let choice = body
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::Provider("Provider response contained no choices".to_string()))?;

        choice.message.content.ok_or_else(|| {
            Error::Provider("Provider response contained no message content".to_string())
        })
    }
}

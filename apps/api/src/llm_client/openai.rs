//! OpenAI Chat Completions provider. Interchangeable with the Anthropic one.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::prompts::DEFAULT_SYSTEM;
use super::{gateway_error, GatewayError, LlmError, ModelGateway, MAX_TOKENS};

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
/// Used when `OPENAI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gpt-4";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    error: OpenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    message: String,
}

#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(api_key: Option<String>, model: Option<String>) -> Result<Self, GatewayError> {
        let api_key = api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or(GatewayError::MissingCredential {
                provider: "openai",
                var: "OPENAI_API_KEY",
            })?;

        Ok(Self {
            client: Client::builder().build()?,
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        })
    }

    pub async fn call(&self, prompt: &str, system: &str) -> Result<ChatResponse, LlmError> {
        let request_body = ChatRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        let response = self
            .client
            .post(OPENAI_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<OpenAiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat: ChatResponse = response.json().await?;
        if let Some(usage) = &chat.usage {
            debug!(
                "OpenAI call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }
        Ok(chat)
    }
}

#[async_trait]
impl ModelGateway for OpenAiClient {
    async fn generate(&self, prompt: &str, system: Option<&str>) -> String {
        let system = system.unwrap_or(DEFAULT_SYSTEM);
        let result = self.call(prompt, system).await.and_then(|response| {
            response
                .text()
                .map(str::to_string)
                .ok_or(LlmError::EmptyContent)
        });

        match result {
            Ok(text) => text,
            Err(e) => {
                warn!("OpenAI call failed: {e}");
                gateway_error(e)
            }
        }
    }

    fn model(&self) -> &str {
        &self.model
    }
}

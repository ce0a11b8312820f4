//! Anthropic Messages API provider.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::prompts::DEFAULT_SYSTEM;
use super::{gateway_error, GatewayError, LlmError, ModelGateway, MAX_TOKENS};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// Used when `ANTHROPIC_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-5";

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct AnthropicResponse {
    pub content: Vec<ContentBlock>,
    pub usage: Usage,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl AnthropicResponse {
    /// Extracts the text content from the first text block.
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// Claude over the Messages API. One request per call, no retries.
#[derive(Clone)]
pub struct AnthropicClient {
    client: Client,
    api_key: String,
    model: String,
}

impl AnthropicClient {
    pub fn new(api_key: Option<String>, model: Option<String>) -> Result<Self, GatewayError> {
        let api_key = api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or(GatewayError::MissingCredential {
                provider: "claude",
                var: "ANTHROPIC_API_KEY",
            })?;

        Ok(Self {
            client: Client::builder().build()?,
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        })
    }

    /// Makes a raw call to the Messages API, returning the full response object.
    pub async fn call(&self, prompt: &str, system: &str) -> Result<AnthropicResponse, LlmError> {
        let request_body = AnthropicRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            system,
            messages: vec![AnthropicMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<AnthropicError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let llm_response: AnthropicResponse = response.json().await?;

        debug!(
            "Anthropic call succeeded: input_tokens={}, output_tokens={}",
            llm_response.usage.input_tokens, llm_response.usage.output_tokens
        );

        Ok(llm_response)
    }
}

#[async_trait]
impl ModelGateway for AnthropicClient {
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
                warn!("Anthropic call failed: {e}");
                gateway_error(e)
            }
        }
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_text_picks_first_text_block() {
        let json = r#"{
            "content": [
                {"type": "tool_use", "text": null},
                {"type": "text", "text": "株式会社Acmeの分析"}
            ],
            "usage": {"input_tokens": 10, "output_tokens": 20}
        }"#;
        let response: AnthropicResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text(), Some("株式会社Acmeの分析"));
    }

    #[test]
    fn test_blank_key_is_missing_credential() {
        let result = AnthropicClient::new(Some("   ".to_string()), None);
        assert!(matches!(
            result,
            Err(GatewayError::MissingCredential {
                var: "ANTHROPIC_API_KEY",
                ..
            })
        ));
    }

    #[test]
    fn test_default_model_applies() {
        let client = AnthropicClient::new(Some("sk-ant-test".to_string()), None).unwrap();
        assert_eq!(client.model(), DEFAULT_MODEL);
    }
}

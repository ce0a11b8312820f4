/// Model Gateway — the single point of entry for all text-generation calls.
///
/// ARCHITECTURAL RULE: No other module may call a provider API directly.
/// Analyzers, generators and the workflow only ever see `dyn ModelGateway`.
///
/// The gateway never fails towards its caller: provider errors come back
/// in-band as a string starting with `GATEWAY_ERROR_PREFIX`.
use std::fmt::Display;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::config::{Config, LlmProvider};

pub mod anthropic;
pub mod openai;
pub mod prompts;

#[cfg(test)]
pub mod stub;

/// Marker prepended to every in-band gateway failure.
pub const GATEWAY_ERROR_PREFIX: &str = "Error: ";

/// Upper bound on generated tokens for both providers.
pub const MAX_TOKENS: u32 = 2000;

/// Transport / provider failure inside a concrete client.
/// Never crosses the `ModelGateway` boundary; it is rendered into text there.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Construction-time configuration failure. The only fatal error class.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Required environment variable '{var}' is not set (provider: {provider})")]
    MissingCredential {
        provider: &'static str,
        var: &'static str,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Uniform interface to a text-generation backend.
///
/// Carried everywhere as `Arc<dyn ModelGateway>` so tests can swap in a stub.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Sends one prompt and returns the raw reply text, or an
    /// `"Error: <message>"` string on any failure.
    async fn generate(&self, prompt: &str, system: Option<&str>) -> String;

    /// Model identifier, for logs.
    fn model(&self) -> &str;
}

/// Builds the gateway selected by `config.llm_provider`.
/// Fails fast when the provider's credential is absent.
pub fn connect(config: &Config) -> Result<Arc<dyn ModelGateway>, GatewayError> {
    let gateway: Arc<dyn ModelGateway> = match config.llm_provider {
        LlmProvider::Claude => Arc::new(anthropic::AnthropicClient::new(
            config.anthropic_api_key.clone(),
            config.anthropic_model.clone(),
        )?),
        LlmProvider::OpenAi => Arc::new(openai::OpenAiClient::new(
            config.openai_api_key.clone(),
            config.openai_model.clone(),
        )?),
    };
    info!(
        "Model gateway ready (provider: {}, model: {})",
        config.llm_provider.as_str(),
        gateway.model()
    );
    Ok(gateway)
}

/// Renders any failure as an in-band gateway error string.
pub fn gateway_error(err: impl Display) -> String {
    format!("{GATEWAY_ERROR_PREFIX}{err}")
}

/// True when `text` is an in-band gateway failure rather than model output.
pub fn is_gateway_error(text: &str) -> bool {
    text.starts_with(GATEWAY_ERROR_PREFIX)
}

/// Returns `Err(text)` for an in-band gateway failure, `Ok(text)` otherwise.
pub fn check_reply(text: String) -> Result<String, String> {
    if is_gateway_error(&text) {
        Err(text)
    } else {
        Ok(text)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Best-effort structured replies
// ────────────────────────────────────────────────────────────────────────────

/// Keys the model wrote beyond the requested shape. Reply structs flatten
/// this in so a decoded reply re-serializes to the document the model sent.
pub type ExtraFields = serde_json::Map<String, Value>;

/// Tag key carried by every serialized `ModelReply`.
const STATUS_TAG: &str = "status";

/// A JSON object shape a prompt asks the model for.
pub trait ReplyShape: DeserializeOwned {
    /// Top-level keys the prompt requests. An object carrying none of them
    /// is not this shape. Empty accepts any object.
    const KEYS: &'static [&'static str];
}

impl ReplyShape for Value {
    const KEYS: &'static [&'static str] = &[];
}

/// Outcome of a call whose prompt asked for a JSON shape.
///
/// The requested schema is a hint, not a contract: consumers must handle the
/// raw-text variant as well as the structured one. On the wire the
/// structured object's own keys sit beside `status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ModelReply<T> {
    Success(T),
    TextResponse { raw_response: String },
    Error { error: String },
}

impl<T> ModelReply<T> {
    pub fn failed(error: impl Into<String>) -> Self {
        ModelReply::Error {
            error: error.into(),
        }
    }

    pub fn structured(&self) -> Option<&T> {
        match self {
            ModelReply::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ModelReply::Error { error } => Some(error),
            _ => None,
        }
    }
}

/// Decodes a model reply into `T`.
///
/// Gateway error marker → `Error`; a JSON object in the requested shape →
/// `Success`; anything else → `TextResponse` carrying the untouched text.
pub fn decode_reply<T: ReplyShape>(text: String) -> ModelReply<T> {
    if is_gateway_error(&text) {
        return ModelReply::Error { error: text };
    }
    match parse_shape(strip_json_fences(&text)) {
        Some(result) => ModelReply::Success(result),
        None => ModelReply::TextResponse { raw_response: text },
    }
}

/// Only objects qualify: they must name at least one requested key and must
/// not carry a `status` key, which would clash with the reply tag.
fn parse_shape<T: ReplyShape>(json: &str) -> Option<T> {
    let Value::Object(object) = serde_json::from_str::<Value>(json).ok()? else {
        return None;
    };
    if object.contains_key(STATUS_TAG) {
        return None;
    }
    if !T::KEYS.is_empty() && !T::KEYS.iter().any(|key| object.contains_key(*key)) {
        return None;
    }
    serde_json::from_value(Value::Object(object)).ok()
}

/// Pretty JSON for embedding a value in a prompt. Non-ASCII is kept verbatim.
pub fn prompt_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Deserialize, Serialize)]
    struct Company {
        name: String,
        #[serde(flatten)]
        extra: ExtraFields,
    }

    impl ReplyShape for Company {
        const KEYS: &'static [&'static str] = &["name"];
    }

    fn company(name: &str) -> Company {
        Company {
            name: name.to_string(),
            extra: ExtraFields::new(),
        }
    }

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_decode_reply_structured() {
        let reply: ModelReply<Company> = decode_reply(r#"{"name": "Acme"}"#.to_string());
        assert_eq!(reply, ModelReply::Success(company("Acme")));
    }

    #[test]
    fn test_decode_reply_fenced_json_is_structured() {
        let reply: ModelReply<Company> = decode_reply("```json\n{\"name\": \"Acme\"}\n```".into());
        assert!(reply.structured().is_some());
    }

    #[test]
    fn test_decode_reply_prose_degrades_to_text() {
        let text = "御社の求める人物像は挑戦心のある人です。".to_string();
        let reply: ModelReply<Company> = decode_reply(text.clone());
        assert_eq!(reply, ModelReply::TextResponse { raw_response: text });
    }

    #[test]
    fn test_decode_reply_keeps_unrequested_keys() {
        let text = r#"{"name": "Acme", "founded": 1999, "notes": {"hq": "東京"}}"#;
        let reply: ModelReply<Company> = decode_reply(text.to_string());

        let decoded = serde_json::to_value(reply.structured().unwrap()).unwrap();
        let sent: Value = serde_json::from_str(text).unwrap();
        assert_eq!(decoded, sent);
    }

    #[test]
    fn test_decode_reply_off_shape_object_degrades_to_text() {
        let text = r#"{"analysis": "挑戦心と誠実さを重視する企業です"}"#.to_string();
        let reply: ModelReply<Company> = decode_reply(text.clone());
        assert_eq!(reply, ModelReply::TextResponse { raw_response: text });
    }

    #[test]
    fn test_decode_reply_non_object_json_degrades_to_text() {
        for text in [r#"["a", "b"]"#, r#""quoted""#, "42"] {
            let reply: ModelReply<Value> = decode_reply(text.to_string());
            assert!(matches!(reply, ModelReply::TextResponse { .. }), "{text}");
        }
    }

    #[test]
    fn test_decode_reply_status_key_degrades_to_text() {
        let reply: ModelReply<Value> = decode_reply(r#"{"status": "ok", "score": 3}"#.into());
        assert!(matches!(reply, ModelReply::TextResponse { .. }));
    }

    #[test]
    fn test_decode_reply_gateway_marker_is_error() {
        let reply: ModelReply<Company> = decode_reply(gateway_error("connection refused"));
        assert_eq!(reply.error_message(), Some("Error: connection refused"));
    }

    #[test]
    fn test_success_keys_sit_beside_status() {
        let reply = ModelReply::Success(company("Acme"));
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json, serde_json::json!({"status": "success", "name": "Acme"}));

        let back: ModelReply<Company> = serde_json::from_value(json).unwrap();
        assert_eq!(back, reply);
    }

    #[test]
    fn test_reply_serializes_with_status_tag() {
        let reply: ModelReply<Company> = ModelReply::TextResponse {
            raw_response: "plain".to_string(),
        };
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["status"], "text_response");
        assert_eq!(json["raw_response"], "plain");

        let failed: ModelReply<Company> = ModelReply::failed("boom");
        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["error"], "boom");
    }

    #[test]
    fn test_check_reply_splits_on_marker() {
        assert_eq!(check_reply("ok".to_string()), Ok("ok".to_string()));
        assert!(check_reply(gateway_error("x")).is_err());
    }

    #[test]
    fn test_connect_without_credential_fails_fast() {
        let config = Config {
            llm_provider: LlmProvider::Claude,
            anthropic_api_key: None,
            openai_api_key: Some("sk-test".to_string()),
            anthropic_model: None,
            openai_model: None,
            port: 8080,
            rust_log: "info".to_string(),
            session_ttl_secs: 7200,
        };
        let err = connect(&config).err().expect("missing key must fail");
        assert!(err.to_string().contains("ANTHROPIC_API_KEY"));

        let config = Config {
            llm_provider: LlmProvider::OpenAi,
            openai_api_key: None,
            ..config
        };
        let err = connect(&config).err().expect("missing key must fail");
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_connect_with_credential_succeeds() {
        let config = Config {
            llm_provider: LlmProvider::OpenAi,
            anthropic_api_key: None,
            openai_api_key: Some("sk-test".to_string()),
            anthropic_model: None,
            openai_model: Some("gpt-4o".to_string()),
            port: 8080,
            rust_log: "info".to_string(),
            session_ttl_secs: 7200,
        };
        let gateway = connect(&config).unwrap();
        assert_eq!(gateway.model(), "gpt-4o");
    }
}

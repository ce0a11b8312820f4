// Shared prompt constants.
// Each component that calls the gateway defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System instruction used when a caller does not supply one.
pub const DEFAULT_SYSTEM: &str = "You are a helpful assistant for job hunting support.";

/// Appended to prompts that expect a JSON reply.
pub const JSON_ONLY_INSTRUCTION: &str = "\
回答は有効なJSONのみで返してください。JSON以外の説明文やマークダウンのコードフェンスは含めないでください。";

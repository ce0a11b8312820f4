//! Essay Generator — self-PR, motivation letter, scored critique.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::essays::prompts::{
    IMPROVE_ESSAY_PROMPT_TEMPLATE, IMPROVE_ESSAY_SYSTEM, MOTIVATION_PROMPT_TEMPLATE,
    SELF_PR_PROMPT_TEMPLATE, SELF_PR_SYSTEM,
};
use crate::llm_client::{
    check_reply, decode_reply, gateway_error, prompt_json, ExtraFields, ModelGateway, ModelReply,
    ReplyShape,
};

/// Essay type used when the caller does not name one.
pub const DEFAULT_ESSAY_TYPE: &str = "自己PR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelfPr {
    pub self_pr: String,
}

/// One criterion as the model wrote it: `8`, `8.5` and `"8"` are all accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EssayScore {
    Number(serde_json::Number),
    Text(String),
}

impl EssayScore {
    pub fn value(&self) -> Option<f64> {
        match self {
            EssayScore::Number(n) => n.as_f64(),
            EssayScore::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// Five 1–10 criteria. All five are required for a structured decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EssayScores {
    pub structure: EssayScore,
    pub specificity: EssayScore,
    pub uniqueness: EssayScore,
    pub motivation: EssayScore,
    pub writing: EssayScore,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl EssayScores {
    /// True when every score reads as a number in 1..=10.
    pub fn in_range(&self) -> bool {
        [
            &self.structure,
            &self.specificity,
            &self.uniqueness,
            &self.motivation,
            &self.writing,
        ]
        .iter()
        .all(|s| s.value().is_some_and(|v| (1.0..=10.0).contains(&v)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EssayImprovement {
    pub category: String,
    pub issue: String,
    pub suggestion: String,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Structured reply of `improve_essay`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EssayCritique {
    pub scores: EssayScores,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_score: Option<EssayScore>,
    #[serde(default)]
    pub improvements: Vec<EssayImprovement>,
    #[serde(default)]
    pub revised_text: String,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl ReplyShape for EssayCritique {
    const KEYS: &'static [&'static str] = &["scores", "total_score", "improvements", "revised_text"];
}

pub struct EssayGenerator {
    gateway: Arc<dyn ModelGateway>,
}

impl EssayGenerator {
    pub fn new(gateway: Arc<dyn ModelGateway>) -> Self {
        Self { gateway }
    }

    /// Self-PR draft, optionally aimed at one company.
    pub async fn generate_self_pr<U: Serialize + ?Sized>(
        &self,
        user_info: &U,
        target_company: Option<&str>,
    ) -> ModelReply<SelfPr> {
        let user_json = match prompt_json(user_info) {
            Ok(json) => json,
            Err(e) => return ModelReply::failed(e.to_string()),
        };
        let company_context = target_company
            .filter(|c| !c.trim().is_empty())
            .map(|c| format!("対象企業: {c}\n"))
            .unwrap_or_default();
        let prompt = SELF_PR_PROMPT_TEMPLATE
            .replace("{company_context}", &company_context)
            .replace("{user_info_json}", &user_json);

        let reply = self.gateway.generate(&prompt, Some(SELF_PR_SYSTEM)).await;
        match check_reply(reply) {
            Ok(self_pr) => {
                info!("Self-PR generated ({} chars)", self_pr.chars().count());
                ModelReply::Success(SelfPr { self_pr })
            }
            Err(error) => ModelReply::Error { error },
        }
    }

    /// Scores an essay on five criteria and proposes a rewrite. A critique
    /// whose scores fall outside 1..=10 is returned as raw text.
    pub async fn improve_essay(&self, essay_text: &str, essay_type: &str) -> ModelReply<EssayCritique> {
        if essay_text.trim().is_empty() {
            return ModelReply::failed("添削する文章を入力してください");
        }
        let essay_type = if essay_type.trim().is_empty() {
            DEFAULT_ESSAY_TYPE
        } else {
            essay_type
        };
        let prompt = IMPROVE_ESSAY_PROMPT_TEMPLATE
            .replace("{essay_type}", essay_type)
            .replace("{essay_text}", essay_text);

        let reply = self
            .gateway
            .generate(&prompt, Some(IMPROVE_ESSAY_SYSTEM))
            .await;
        match decode_reply::<EssayCritique>(reply.clone()) {
            ModelReply::Success(critique) if !critique.scores.in_range() => {
                warn!("Essay critique scores outside 1-10; returning raw text");
                ModelReply::TextResponse {
                    raw_response: reply,
                }
            }
            decoded => decoded,
        }
    }

    /// Motivation letter as free text; a gateway error string is returned as is.
    pub async fn generate_motivation_letter<C, U>(&self, company_info: &C, user_info: &U) -> String
    where
        C: Serialize + ?Sized,
        U: Serialize + ?Sized,
    {
        let company_json = match prompt_json(company_info) {
            Ok(json) => json,
            Err(e) => return gateway_error(e),
        };
        let user_json = match prompt_json(user_info) {
            Ok(json) => json,
            Err(e) => return gateway_error(e),
        };
        let prompt = MOTIVATION_PROMPT_TEMPLATE
            .replace("{user_info_json}", &user_json)
            .replace("{company_info_json}", &company_json);

        self.gateway.generate(&prompt, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::stub::ScriptedGateway;
    use serde_json::json;

    const CRITIQUE_JSON: &str = r#"{
        "scores": {"structure": 8, "specificity": 7, "uniqueness": 6, "motivation": 8, "writing": 9},
        "total_score": 38,
        "improvements": [{"category": "構成", "issue": "結論が遅い", "suggestion": "冒頭に結論を置く"}],
        "revised_text": "私の強みは粘り強さです。"
    }"#;

    #[tokio::test]
    async fn test_self_pr_includes_company_context() {
        let gateway = Arc::new(ScriptedGateway::always("私の強みは粘り強さです。"));
        let generator = EssayGenerator::new(gateway.clone());

        let reply = generator
            .generate_self_pr(&json!({"strengths": "粘り強さ"}), Some("Acme"))
            .await;

        assert_eq!(
            reply,
            ModelReply::Success(SelfPr {
                self_pr: "私の強みは粘り強さです。".to_string()
            })
        );
        assert_eq!(
            serde_json::to_value(&reply).unwrap(),
            json!({"status": "success", "self_pr": "私の強みは粘り強さです。"})
        );
        let call = &gateway.calls()[0];
        assert!(call.prompt.contains("対象企業: Acme"));
        assert!(call.prompt.contains("粘り強さ"));
        assert_eq!(call.system.as_deref(), Some(SELF_PR_SYSTEM));
    }

    #[tokio::test]
    async fn test_self_pr_without_company_has_no_context_line() {
        let gateway = Arc::new(ScriptedGateway::always("PR"));
        EssayGenerator::new(gateway.clone())
            .generate_self_pr(&json!({}), None)
            .await;
        assert!(!gateway.calls()[0].prompt.contains("対象企業"));
    }

    #[tokio::test]
    async fn test_self_pr_gateway_error_is_error_variant() {
        let gateway = Arc::new(ScriptedGateway::always(gateway_error("401")));
        let reply = EssayGenerator::new(gateway)
            .generate_self_pr(&json!({}), None)
            .await;
        assert_eq!(reply.error_message(), Some("Error: 401"));
    }

    #[tokio::test]
    async fn test_improve_essay_decodes_critique() {
        let gateway = Arc::new(ScriptedGateway::always(CRITIQUE_JSON));
        let reply = EssayGenerator::new(gateway)
            .improve_essay("私は粘り強い人間です。", "自己PR")
            .await;

        let critique = reply.structured().expect("structured critique");
        assert!(critique.scores.in_range());
        assert_eq!(critique.scores.writing.value(), Some(9.0));
        assert_eq!(critique.total_score.as_ref().and_then(EssayScore::value), Some(38.0));
        assert_eq!(critique.improvements[0].category, "構成");
        assert_eq!(critique.revised_text, "私の強みは粘り強さです。");
    }

    #[tokio::test]
    async fn test_improve_essay_prose_degrades_to_text() {
        let prose = "全体的によく書けています。結論を先に書きましょう。";
        let gateway = Arc::new(ScriptedGateway::always(prose));
        let reply = EssayGenerator::new(gateway)
            .improve_essay("私は粘り強い人間です。", "自己PR")
            .await;
        assert_eq!(
            reply,
            ModelReply::TextResponse {
                raw_response: prose.to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_improve_essay_missing_scores_degrades_to_text() {
        let gateway = Arc::new(ScriptedGateway::always(r#"{"revised_text": "改善版"}"#));
        let reply = EssayGenerator::new(gateway)
            .improve_essay("本文", "志望動機")
            .await;
        assert!(matches!(reply, ModelReply::TextResponse { .. }));
    }

    #[tokio::test]
    async fn test_improve_essay_blank_text_skips_model() {
        let gateway = Arc::new(ScriptedGateway::always(CRITIQUE_JSON));
        let reply = EssayGenerator::new(gateway.clone())
            .improve_essay("   ", "自己PR")
            .await;
        assert!(reply.error_message().is_some());
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_improve_essay_blank_type_uses_default() {
        let gateway = Arc::new(ScriptedGateway::always(CRITIQUE_JSON));
        EssayGenerator::new(gateway.clone())
            .improve_essay("本文", "")
            .await;
        assert!(gateway.calls()[0].prompt.contains("ES種類: 自己PR"));
    }

    #[tokio::test]
    async fn test_motivation_letter_passes_gateway_text_through() {
        let gateway = Arc::new(ScriptedGateway::always(gateway_error("overloaded")));
        let letter = EssayGenerator::new(gateway.clone())
            .generate_motivation_letter(&json!({"company_name": "Acme"}), &json!({"name": "山田"}))
            .await;
        assert_eq!(letter, "Error: overloaded");
        let call = &gateway.calls()[0];
        assert!(call.prompt.contains("Acme"));
        assert!(call.prompt.contains("山田"));
        assert!(call.system.is_none());
    }

    #[tokio::test]
    async fn test_improve_essay_accepts_fractional_and_quoted_scores() {
        let gateway = Arc::new(ScriptedGateway::always(
            r#"{"scores": {"structure": 8.5, "specificity": "7", "uniqueness": 6, "motivation": 8, "writing": 9}, "revised_text": "改善版"}"#,
        ));
        let reply = EssayGenerator::new(gateway)
            .improve_essay("本文", "自己PR")
            .await;

        let critique = reply.structured().expect("structured critique");
        assert_eq!(critique.scores.structure.value(), Some(8.5));
        assert_eq!(critique.scores.specificity.value(), Some(7.0));
    }

    #[tokio::test]
    async fn test_improve_essay_out_of_range_scores_degrade_to_text() {
        let text = r#"{"scores": {"structure": 0, "specificity": 7, "uniqueness": 6, "motivation": 11, "writing": 9}}"#;
        let gateway = Arc::new(ScriptedGateway::always(text));
        let reply = EssayGenerator::new(gateway)
            .improve_essay("本文", "自己PR")
            .await;

        assert_eq!(
            reply,
            ModelReply::TextResponse {
                raw_response: text.to_string()
            }
        );
    }
}

//! Industry Matcher — aptitude scores across a fixed industry list.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::industry::prompts::{
    INDUSTRY_FIT_PROMPT_TEMPLATE, INDUSTRY_FIT_SYSTEM_TEMPLATE, INDUSTRY_INFO_PROMPT_TEMPLATE,
    MOTIVATION_TEMPLATE_PROMPT_TEMPLATE,
};
use crate::llm_client::{
    decode_reply, prompt_json, ExtraFields, ModelGateway, ModelReply, ReplyShape,
};
use crate::personality::models::FitScore;

/// Industries every aptitude analysis covers.
pub const INDUSTRIES: [&str; 10] = [
    "コンサルティング",
    "IT・ソフトウェア",
    "金融・銀行",
    "メーカー・製造業",
    "商社・流通",
    "インフラ・公共",
    "メディア・広告",
    "医療・ヘルスケア",
    "不動産・建設",
    "教育・研究",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndustryScore {
    /// 1–10 as written by the model, number or string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<FitScore>,
    pub reason: String,
    pub recommended_roles: Vec<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndustryFit {
    pub overall_assessment: String,
    pub industry_scores: BTreeMap<String, IndustryScore>,
    pub top_recommendations: Vec<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl ReplyShape for IndustryFit {
    const KEYS: &'static [&'static str] =
        &["overall_assessment", "industry_scores", "top_recommendations"];
}

pub struct IndustryMatcher {
    gateway: Arc<dyn ModelGateway>,
}

impl IndustryMatcher {
    pub fn new(gateway: Arc<dyn ModelGateway>) -> Self {
        Self { gateway }
    }

    pub async fn analyze_fit(&self, user_profile: &Value) -> ModelReply<IndustryFit> {
        let profile_json = match prompt_json(user_profile) {
            Ok(json) => json,
            Err(e) => return ModelReply::failed(e.to_string()),
        };
        let system = INDUSTRY_FIT_SYSTEM_TEMPLATE.replace("{industry_list}", &industry_list());
        let prompt = INDUSTRY_FIT_PROMPT_TEMPLATE.replace("{user_profile_json}", &profile_json);

        let reply = self.gateway.generate(&prompt, Some(&system)).await;
        decode_reply(reply)
    }

    /// Industry briefing; no fixed schema.
    pub async fn get_industry_info(&self, industry_name: &str) -> ModelReply<Value> {
        let prompt = INDUSTRY_INFO_PROMPT_TEMPLATE.replace("{industry_name}", industry_name);
        let reply = self.gateway.generate(&prompt, None).await;
        decode_reply(reply)
    }

    pub async fn generate_motivation_template(
        &self,
        industry_name: &str,
        user_strengths: &[String],
    ) -> String {
        let prompt = MOTIVATION_TEMPLATE_PROMPT_TEMPLATE
            .replace("{strengths}", &user_strengths.join(", "))
            .replace("{industry_name}", industry_name);
        self.gateway.generate(&prompt, None).await
    }
}

fn industry_list() -> String {
    INDUSTRIES
        .iter()
        .map(|i| format!("- {i}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::stub::ScriptedGateway;
    use serde_json::json;

    #[tokio::test]
    async fn test_analyze_fit_lists_every_industry_in_system() {
        let gateway = Arc::new(ScriptedGateway::always(
            r#"{
                "overall_assessment": "論理的思考が強み",
                "industry_scores": {
                    "コンサルティング": {"score": 9, "reason": "分析力", "recommended_roles": ["戦略"]},
                    "IT・ソフトウェア": {"score": 7, "reason": "技術関心", "recommended_roles": []}
                },
                "top_recommendations": ["コンサルティング"]
            }"#,
        ));
        let matcher = IndustryMatcher::new(gateway.clone());

        let reply = matcher.analyze_fit(&json!({"major": "経済学"})).await;

        let fit = reply.structured().expect("structured fit");
        assert_eq!(fit.industry_scores.len(), 2);
        assert_eq!(
            fit.industry_scores["コンサルティング"].score,
            Some(FitScore::Number(9.into()))
        );
        assert_eq!(fit.top_recommendations, vec!["コンサルティング"]);
        let system = gateway.calls()[0].system.clone().unwrap();
        assert!(INDUSTRIES.iter().all(|i| system.contains(i)));
    }

    #[tokio::test]
    async fn test_industry_info_prose_degrades_to_text() {
        let gateway = Arc::new(ScriptedGateway::always("IT業界は成長を続けています。"));
        let reply = IndustryMatcher::new(gateway.clone())
            .get_industry_info("IT・ソフトウェア")
            .await;
        assert!(matches!(reply, ModelReply::TextResponse { .. }));
        assert!(gateway.calls()[0]
            .prompt
            .contains("IT・ソフトウェア業界について"));
    }

    #[tokio::test]
    async fn test_motivation_template_joins_strengths() {
        let gateway = Arc::new(ScriptedGateway::always("テンプレート"));
        let text = IndustryMatcher::new(gateway.clone())
            .generate_motivation_template("金融・銀行", &["誠実さ".to_string(), "数字に強い".to_string()])
            .await;
        assert_eq!(text, "テンプレート");
        assert!(gateway.calls()[0].prompt.contains("誠実さ, 数字に強い"));
    }
}

//! Personality Analyzer — required profile, current profile, gap report.
//!
//! Every operation follows the same shape: serialize inputs → fill prompt →
//! one gateway call → best-effort decode (`decode_reply`). Nothing here
//! validates the structure of its inputs beyond forwarding them.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::company::analyzer::CompanyAnalysisResult;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::{decode_reply, prompt_json, ModelGateway, ModelReply, ReplyShape};
use crate::personality::models::{CurrentPersonality, GapAnalysisResult, RequiredPersonality};
use crate::personality::prompts::{
    DEVELOPMENT_PLAN_PROMPT_TEMPLATE, GAP_ANALYSIS_PROMPT_TEMPLATE, GAP_ANALYSIS_SYSTEM,
    REQUIRED_PERSONALITY_PROMPT_TEMPLATE, REQUIRED_PERSONALITY_SYSTEM,
    USER_PERSONALITY_PROMPT_TEMPLATE, USER_PERSONALITY_SYSTEM,
};

pub struct PersonalityAnalyzer {
    gateway: Arc<dyn ModelGateway>,
}

impl PersonalityAnalyzer {
    pub fn new(gateway: Arc<dyn ModelGateway>) -> Self {
        Self { gateway }
    }

    /// Infers the personality the analyzed company looks for.
    pub async fn analyze_required_personality(
        &self,
        company_analysis: &CompanyAnalysisResult,
    ) -> ModelReply<RequiredPersonality> {
        let prompt = match prompt_json(company_analysis) {
            Ok(json) => fill(REQUIRED_PERSONALITY_PROMPT_TEMPLATE)
                .replace("{company_analysis_json}", &json),
            Err(e) => return ModelReply::failed(e.to_string()),
        };
        self.ask(&prompt, REQUIRED_PERSONALITY_SYSTEM).await
    }

    /// Infers the user's current personality from caller-supplied facts.
    pub async fn define_user_personality(
        &self,
        user_info: &Value,
    ) -> ModelReply<CurrentPersonality> {
        let prompt = match prompt_json(user_info) {
            Ok(json) => fill(USER_PERSONALITY_PROMPT_TEMPLATE).replace("{user_info_json}", &json),
            Err(e) => return ModelReply::failed(e.to_string()),
        };
        self.ask(&prompt, USER_PERSONALITY_SYSTEM).await
    }

    /// Compares the two profiles. Degraded (raw-text) profiles are forwarded
    /// as they are.
    pub async fn analyze_personality_gap(
        &self,
        user_personality: &ModelReply<CurrentPersonality>,
        required_personality: &ModelReply<RequiredPersonality>,
    ) -> ModelReply<GapAnalysisResult> {
        let user_json = match prompt_json(user_personality) {
            Ok(json) => json,
            Err(e) => return ModelReply::failed(e.to_string()),
        };
        let required_json = match prompt_json(required_personality) {
            Ok(json) => json,
            Err(e) => return ModelReply::failed(e.to_string()),
        };
        let prompt = fill(GAP_ANALYSIS_PROMPT_TEMPLATE)
            .replace("{required_personality_json}", &required_json)
            .replace("{user_personality_json}", &user_json);
        self.ask(&prompt, GAP_ANALYSIS_SYSTEM).await
    }

    /// Free-text improvement plan. Gateway errors come back verbatim.
    pub async fn generate_personality_development_plan(
        &self,
        gap_analysis: &ModelReply<GapAnalysisResult>,
        company_name: &str,
    ) -> String {
        let gap_json = match prompt_json(gap_analysis) {
            Ok(json) => json,
            Err(e) => return crate::llm_client::gateway_error(e),
        };
        let prompt = DEVELOPMENT_PLAN_PROMPT_TEMPLATE
            .replace("{company_name}", company_name)
            .replace("{gap_analysis_json}", &gap_json);
        self.gateway.generate(&prompt, None).await
    }

    async fn ask<T: ReplyShape>(&self, prompt: &str, system: &str) -> ModelReply<T> {
        let reply = self.gateway.generate(prompt, Some(system)).await;
        let decoded = decode_reply(reply);
        debug!(
            "Personality reply decoded as {}",
            match &decoded {
                ModelReply::Success(_) => "structured",
                ModelReply::TextResponse { .. } => "raw text",
                ModelReply::Error { .. } => "error",
            }
        );
        decoded
    }
}

fn fill(template: &str) -> String {
    template.replace("{json_only}", JSON_ONLY_INSTRUCTION)
}

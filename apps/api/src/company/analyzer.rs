//! Company Analyzer — one model call per analysis, plus a second call for
//! likely interview questions.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::company::prompts::{
    COMPANY_ANALYSIS_PROMPT_TEMPLATE, COMPANY_ANALYSIS_SYSTEM, INTERVIEW_POINTS_PROMPT_TEMPLATE,
};
use crate::company::source::{
    CompanyBasicInfo, CompanyDataSource, IrSummary, PlaceholderCompanyData,
};
use crate::llm_client::{check_reply, prompt_json, ModelGateway};

/// Maximum number of interview points kept from the model's list.
pub const MAX_INTERVIEW_POINTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    Success,
    Error,
}

/// Result of `CompanyAnalyzer::analyze`. On error only `company_name`,
/// `status` and `error` are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyAnalysisResult {
    pub company_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basic_info: Option<CompanyBasicInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ir_summary: Option<IrSummary>,
    /// Model free text; its shape is whatever the model chose.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<String>,
    pub status: AnalysisStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CompanyAnalysisResult {
    pub fn failure(company_name: &str, error: impl Into<String>) -> Self {
        Self {
            company_name: company_name.to_string(),
            basic_info: None,
            ir_summary: None,
            ai_analysis: None,
            status: AnalysisStatus::Error,
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == AnalysisStatus::Success
    }

    /// Industry from the basic info, empty when unknown.
    pub fn industry(&self) -> &str {
        self.basic_info
            .as_ref()
            .map(|b| b.industry.as_str())
            .unwrap_or("")
    }
}

pub struct CompanyAnalyzer {
    gateway: Arc<dyn ModelGateway>,
    source: Arc<dyn CompanyDataSource>,
}

impl CompanyAnalyzer {
    pub fn new(gateway: Arc<dyn ModelGateway>) -> Self {
        Self::with_source(gateway, Arc::new(PlaceholderCompanyData))
    }

    pub fn with_source(gateway: Arc<dyn ModelGateway>, source: Arc<dyn CompanyDataSource>) -> Self {
        Self { gateway, source }
    }

    /// Runs the full company analysis. Never fails; problems are reported
    /// through `status = error`.
    pub async fn analyze(&self, company_name: &str) -> CompanyAnalysisResult {
        let company_name = company_name.trim();
        if company_name.is_empty() {
            return CompanyAnalysisResult::failure(company_name, "企業名を入力してください");
        }

        match self.try_analyze(company_name).await {
            Ok(result) => {
                info!("Company analysis completed for {company_name}");
                result
            }
            Err(e) => {
                warn!("Company analysis failed for {company_name}: {e}");
                CompanyAnalysisResult::failure(company_name, e)
            }
        }
    }

    async fn try_analyze(&self, company_name: &str) -> Result<CompanyAnalysisResult, String> {
        let basic_info = self
            .source
            .basic_info(company_name)
            .await
            .map_err(|e| e.to_string())?;
        let ir_summary = self
            .source
            .ir_summary(company_name)
            .await
            .map_err(|e| e.to_string())?;

        let prompt = COMPANY_ANALYSIS_PROMPT_TEMPLATE
            .replace("{company_name}", company_name)
            .replace(
                "{basic_info_json}",
                &prompt_json(&basic_info).map_err(|e| e.to_string())?,
            )
            .replace(
                "{ir_json}",
                &prompt_json(&ir_summary).map_err(|e| e.to_string())?,
            );

        let reply = self
            .gateway
            .generate(&prompt, Some(COMPANY_ANALYSIS_SYSTEM))
            .await;
        let ai_analysis = check_reply(reply)?;

        Ok(CompanyAnalysisResult {
            company_name: company_name.to_string(),
            basic_info: Some(basic_info),
            ir_summary: Some(ir_summary),
            ai_analysis: Some(ai_analysis),
            status: AnalysisStatus::Success,
            error: None,
        })
    }

    /// Re-runs the analysis and asks for likely interview questions.
    /// Returns at most `MAX_INTERVIEW_POINTS`; fewer (even none) is fine.
    pub async fn get_interview_points(&self, company_name: &str) -> Vec<String> {
        let analysis = self.analyze(company_name).await;

        let analysis_json = match prompt_json(&analysis) {
            Ok(json) => json,
            Err(e) => {
                warn!("Could not serialize company analysis: {e}");
                return Vec::new();
            }
        };
        let prompt = INTERVIEW_POINTS_PROMPT_TEMPLATE.replace("{analysis_json}", &analysis_json);

        let reply = self.gateway.generate(&prompt, None).await;
        extract_list_items(&reply, MAX_INTERVIEW_POINTS)
    }
}

/// Keeps trimmed lines that start with a `-` list marker, up to `limit`.
pub fn extract_list_items(text: &str, limit: usize) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| line.starts_with('-'))
        .take(limit)
        .map(str::to_string)
        .collect()
}

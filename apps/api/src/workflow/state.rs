//! Intermediate results of one workflow run.

use serde::Serialize;
use serde_json::Value;

use crate::company::analyzer::CompanyAnalysisResult;
use crate::essays::generator::SelfPr;
use crate::interview::prep::InterviewQuestion;
use crate::llm_client::ModelReply;
use crate::personality::models::{
    CurrentPersonality, GapAnalysisResult, IdentifiedGap, InterviewStrategy, RequiredPersonality,
};

/// Slots are filled in stage order and only by a stage that succeeded.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WorkflowState {
    pub company_analysis: Option<CompanyAnalysisResult>,
    pub required_personality: Option<ModelReply<RequiredPersonality>>,
    pub user_info: Option<Value>,
    pub user_personality: Option<ModelReply<CurrentPersonality>>,
    pub gap_analysis: Option<ModelReply<GapAnalysisResult>>,
    pub generated_essays: Option<GeneratedEssays>,
    pub interview_preparation: Option<InterviewPreparation>,
}

impl WorkflowState {
    pub fn is_complete(&self) -> bool {
        self.company_analysis.is_some()
            && self.required_personality.is_some()
            && self.user_info.is_some()
            && self.user_personality.is_some()
            && self.gap_analysis.is_some()
            && self.generated_essays.is_some()
            && self.interview_preparation.is_some()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedEssays {
    pub self_pr: ModelReply<SelfPr>,
    /// Free text; may carry a gateway error string.
    pub motivation: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InterviewPreparation {
    pub questions: Vec<InterviewQuestion>,
    /// Empty when the gap analysis degraded to text.
    pub strategy: InterviewStrategy,
    pub development_plan: String,
    pub key_points: Vec<String>,
    /// Identified gaps, high severity first, unrated last.
    pub priority_gaps: Vec<IdentifiedGap>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Completed,
    InProgress,
}

/// Snapshot of every slot plus overall progress.
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowSummary {
    pub workflow_summary: WorkflowState,
    pub status: RunStatus,
}

impl From<&WorkflowState> for WorkflowSummary {
    fn from(state: &WorkflowState) -> Self {
        let status = if state.is_complete() {
            RunStatus::Completed
        } else {
            RunStatus::InProgress
        };
        Self {
            workflow_summary: state.clone(),
            status,
        }
    }
}

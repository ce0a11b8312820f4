//! Workflow Orchestrator. Runs the five stages against one owned state.
//!
//! Each stage checks its precondition slots, calls the components it needs,
//! and commits its results only once every principal reply is usable. A
//! refused or failed stage never touches the state.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::company::analyzer::{CompanyAnalysisResult, CompanyAnalyzer};
use crate::company::source::CompanyDataSource;
use crate::essays::generator::EssayGenerator;
use crate::interview::prep::{InterviewPrep, DEFAULT_JOB_TYPE};
use crate::llm_client::{check_reply, ModelGateway, ModelReply};
use crate::personality::analyzer::PersonalityAnalyzer;
use crate::personality::models::{
    CurrentPersonality, GapAnalysisResult, InterviewStrategy, RequiredPersonality,
};
use crate::workflow::profile::ProfileProvider;
use crate::workflow::state::{
    GeneratedEssays, InterviewPreparation, WorkflowState, WorkflowSummary,
};
use crate::workflow::WorkflowError;

/// Success envelope shared by all stages.
#[derive(Debug, Clone, Serialize)]
pub struct StageReport<T> {
    pub status: &'static str,
    pub step: &'static str,
    #[serde(flatten)]
    pub payload: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_step: Option<&'static str>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub workflow_completed: bool,
}

impl<T> StageReport<T> {
    fn advance(step: &'static str, payload: T, next_step: &'static str) -> Self {
        Self {
            status: "success",
            step,
            payload,
            next_step: Some(next_step),
            workflow_completed: false,
        }
    }

    fn finish(step: &'static str, payload: T) -> Self {
        Self {
            status: "success",
            step,
            payload,
            next_step: None,
            workflow_completed: true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyStage {
    pub company_analysis: CompanyAnalysisResult,
    pub required_personality: ModelReply<RequiredPersonality>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PersonalityStage {
    pub user_personality: ModelReply<CurrentPersonality>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GapStage {
    pub gap_analysis: ModelReply<GapAnalysisResult>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EssaysStage {
    pub essays: GeneratedEssays,
}

#[derive(Debug, Clone, Serialize)]
pub struct InterviewStage {
    pub interview_preparation: InterviewPreparation,
}

/// User facts as handed to the essay prompts: the raw user info and the
/// inferred personality, plus what the gap analysis says to lead with.
#[derive(Debug, Serialize)]
struct EnhancedUserInfo<'a> {
    user_info: &'a Value,
    user_personality: &'a ModelReply<CurrentPersonality>,
    highlighted_strengths: Vec<String>,
    improvement_actions: Vec<String>,
}

pub struct Workflow {
    gateway: Arc<dyn ModelGateway>,
    company: CompanyAnalyzer,
    personality: PersonalityAnalyzer,
    essays: EssayGenerator,
    interview: InterviewPrep,
    profiles: Option<Arc<dyn ProfileProvider>>,
    state: WorkflowState,
}

impl Workflow {
    pub fn new(gateway: Arc<dyn ModelGateway>) -> Self {
        Self {
            company: CompanyAnalyzer::new(gateway.clone()),
            personality: PersonalityAnalyzer::new(gateway.clone()),
            essays: EssayGenerator::new(gateway.clone()),
            interview: InterviewPrep::new(gateway.clone()),
            gateway,
            profiles: None,
            state: WorkflowState::default(),
        }
    }

    /// Lets stage 2 fall back to a stored profile.
    pub fn with_profile_provider(mut self, provider: Arc<dyn ProfileProvider>) -> Self {
        self.profiles = Some(provider);
        self
    }

    pub fn with_company_source(mut self, source: Arc<dyn CompanyDataSource>) -> Self {
        self.company = CompanyAnalyzer::with_source(self.gateway.clone(), source);
        self
    }

    #[cfg(test)]
    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn summary(&self) -> WorkflowSummary {
        WorkflowSummary::from(&self.state)
    }

    /// Stage 1. A success starts a new run: every earlier slot is dropped.
    pub async fn start_workflow(
        &mut self,
        company_name: &str,
    ) -> Result<StageReport<CompanyStage>, WorkflowError> {
        let company_analysis = self.company.analyze(company_name).await;
        if !company_analysis.is_success() {
            let error = company_analysis
                .error
                .unwrap_or_else(|| "企業分析に失敗しました".to_string());
            return Err(WorkflowError::CompanyAnalysis(error));
        }

        let required_personality = self
            .personality
            .analyze_required_personality(&company_analysis)
            .await;
        reject_error(&required_personality)?;

        info!("Workflow started for {}", company_analysis.company_name);
        self.state = WorkflowState {
            company_analysis: Some(company_analysis.clone()),
            required_personality: Some(required_personality.clone()),
            ..WorkflowState::default()
        };

        Ok(StageReport::advance(
            "company_analysis_completed",
            CompanyStage {
                company_analysis,
                required_personality,
            },
            "user_personality_definition",
        ))
    }

    /// Stage 2. Uses `user_info` when given, the profile provider otherwise.
    pub async fn define_user_personality(
        &mut self,
        user_info: Option<Value>,
    ) -> Result<StageReport<PersonalityStage>, WorkflowError> {
        if self.state.company_analysis.is_none() {
            return Err(WorkflowError::MissingCompanyAnalysis);
        }
        let user_info = match user_info {
            Some(info) => info,
            None => self.stored_user_info().await?,
        };
        if is_blank(&user_info) {
            return Err(WorkflowError::MissingUserInfo);
        }

        let user_personality = self.personality.define_user_personality(&user_info).await;
        reject_error(&user_personality)?;

        info!("User personality defined");
        self.state.user_info = Some(user_info);
        self.state.user_personality = Some(user_personality.clone());

        Ok(StageReport::advance(
            "user_personality_defined",
            PersonalityStage { user_personality },
            "gap_analysis",
        ))
    }

    /// Stage 3.
    pub async fn analyze_personality_gap(
        &mut self,
    ) -> Result<StageReport<GapStage>, WorkflowError> {
        let (Some(user_personality), Some(required_personality)) = (
            self.state.user_personality.as_ref(),
            self.state.required_personality.as_ref(),
        ) else {
            return Err(WorkflowError::MissingPersonalities);
        };

        let gap_analysis = self
            .personality
            .analyze_personality_gap(user_personality, required_personality)
            .await;
        reject_error(&gap_analysis)?;

        info!("Personality gap analysis completed");
        self.state.gap_analysis = Some(gap_analysis.clone());

        Ok(StageReport::advance(
            "gap_analysis_completed",
            GapStage { gap_analysis },
            "essay_generation",
        ))
    }

    /// Stage 4. Self-PR and motivation letter written from the gap-aware
    /// view of the user.
    pub async fn generate_tailored_essays(
        &mut self,
    ) -> Result<StageReport<EssaysStage>, WorkflowError> {
        let gap_analysis = self
            .state
            .gap_analysis
            .as_ref()
            .ok_or(WorkflowError::MissingGapAnalysis)?;
        let company_analysis = self
            .state
            .company_analysis
            .as_ref()
            .ok_or(WorkflowError::MissingCompanyAnalysis)?;
        let (Some(user_info), Some(user_personality)) = (
            self.state.user_info.as_ref(),
            self.state.user_personality.as_ref(),
        ) else {
            return Err(WorkflowError::MissingPersonalities);
        };

        let enhanced = enhance_user_info(user_info, user_personality, gap_analysis);
        let self_pr = self
            .essays
            .generate_self_pr(&enhanced, Some(&company_analysis.company_name))
            .await;
        reject_error(&self_pr)?;
        let motivation = self
            .essays
            .generate_motivation_letter(company_analysis, &enhanced)
            .await;

        info!("Tailored essays generated for {}", company_analysis.company_name);
        let essays = GeneratedEssays {
            self_pr,
            motivation,
        };
        self.state.generated_essays = Some(essays.clone());

        Ok(StageReport::advance(
            "essays_generated",
            EssaysStage { essays },
            "interview_preparation",
        ))
    }

    /// Stage 5. Completes the run.
    pub async fn prepare_interview_strategy(
        &mut self,
    ) -> Result<StageReport<InterviewStage>, WorkflowError> {
        let gap_analysis = self
            .state
            .gap_analysis
            .as_ref()
            .ok_or(WorkflowError::MissingGapAnalysis)?;
        let company_analysis = self
            .state
            .company_analysis
            .as_ref()
            .ok_or(WorkflowError::MissingCompanyAnalysis)?;
        let company_name = company_analysis.company_name.as_str();

        let questions = self
            .interview
            .generate_questions(company_name, company_analysis.industry(), DEFAULT_JOB_TYPE)
            .await;
        let development_plan = self
            .personality
            .generate_personality_development_plan(gap_analysis, company_name)
            .await;
        let development_plan = check_reply(development_plan).map_err(|e| {
            warn!("Development plan failed for {company_name}: {e}");
            WorkflowError::Model(e)
        })?;

        let (strategy, priority_gaps) = match gap_analysis.structured() {
            Some(g) => (
                g.interview_strategy.clone(),
                g.gap_analysis
                    .gaps_by_severity()
                    .into_iter()
                    .cloned()
                    .collect(),
            ),
            None => Default::default(),
        };
        let key_points = interview_key_points(&strategy);

        info!("Interview preparation completed for {company_name}");
        let interview_preparation = InterviewPreparation {
            questions,
            strategy,
            development_plan,
            key_points,
            priority_gaps,
        };
        self.state.interview_preparation = Some(interview_preparation.clone());

        Ok(StageReport::finish(
            "interview_preparation_completed",
            InterviewStage {
                interview_preparation,
            },
        ))
    }

    async fn stored_user_info(&self) -> Result<Value, WorkflowError> {
        let provider = self.profiles.as_ref().ok_or(WorkflowError::MissingUserInfo)?;
        match provider.profile().await {
            Some(profile) if !profile.is_empty() => Ok(profile.to_user_info()),
            _ => Err(WorkflowError::ProfileNotFound),
        }
    }
}

fn reject_error<T>(reply: &ModelReply<T>) -> Result<(), WorkflowError> {
    match reply.error_message() {
        Some(error) => {
            warn!("Stage aborted by model error: {error}");
            Err(WorkflowError::Model(error.to_string()))
        }
        None => Ok(()),
    }
}

fn is_blank(user_info: &Value) -> bool {
    match user_info {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

fn enhance_user_info<'a>(
    user_info: &'a Value,
    user_personality: &'a ModelReply<CurrentPersonality>,
    gap_analysis: &ModelReply<GapAnalysisResult>,
) -> EnhancedUserInfo<'a> {
    let (highlighted_strengths, improvement_actions) = match gap_analysis.structured() {
        Some(gap) => (
            gap.gap_analysis
                .strengths_match
                .iter()
                .map(|s| s.description.clone())
                .collect(),
            gap.improvement_plan
                .immediate_actions
                .iter()
                .map(|a| a.action.clone())
                .collect(),
        ),
        None => (Vec::new(), Vec::new()),
    };
    EnhancedUserInfo {
        user_info,
        user_personality,
        highlighted_strengths,
        improvement_actions,
    }
}

fn interview_key_points(strategy: &InterviewStrategy) -> Vec<String> {
    strategy
        .highlight_strengths
        .iter()
        .map(|s| format!("強みとしてアピール: {s}"))
        .chain(
            strategy
                .address_gaps
                .iter()
                .map(|g| format!("ギャップ対処法: {g}")),
        )
        .collect()
}

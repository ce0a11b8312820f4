//! Requested reply shapes for personality analysis.
//!
//! Every struct is `#[serde(default)]`: the model decides which keys it
//! fills, so absent keys decode to empty values instead of failing the
//! whole reply. Keys outside the requested shape are kept in `extra`.
//! Anything that is not a JSON object in the requested shape degrades to text.

use serde::{Deserialize, Serialize};

use crate::llm_client::{ExtraFields, ReplyShape};

/// Trait dimensions shared by the required and current profiles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalityTraits {
    pub values: Vec<String>,
    pub behavioral_traits: Vec<String>,
    pub skills: Vec<String>,
    pub communication_style: String,
    pub leadership_style: String,
    pub problem_solving: String,
    pub growth_mindset: String,
    pub teamwork: String,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// The personality a company is inferred to look for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequiredPersonality {
    pub company_name: String,
    pub required_personality: PersonalityTraits,
    pub key_interview_points: Vec<String>,
    pub success_factors: Vec<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// The user's current personality, inferred from self-reported facts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentPersonality {
    pub current_personality: PersonalityTraits,
    pub strengths: Vec<String>,
    pub development_areas: Vec<String>,
    pub personality_summary: String,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl ReplyShape for RequiredPersonality {
    const KEYS: &'static [&'static str] = &[
        "company_name",
        "required_personality",
        "key_interview_points",
        "success_factors",
    ];
}

impl ReplyShape for CurrentPersonality {
    const KEYS: &'static [&'static str] = &[
        "current_personality",
        "strengths",
        "development_areas",
        "personality_summary",
    ];
}

// ────────────────────────────────────────────────────────────────────────────
// Gap analysis
// ────────────────────────────────────────────────────────────────────────────

/// Declared most severe first; the derived order sorts that way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GapSeverity {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrengthMatch {
    pub area: String,
    pub description: String,
    pub interview_appeal: String,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentifiedGap {
    pub area: String,
    pub current_state: String,
    pub required_state: String,
    /// Kept as the model wrote it; see `severity()`.
    pub gap_severity: String,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl IdentifiedGap {
    /// Parses `gap_severity`; `None` for anything outside high/medium/low.
    pub fn severity(&self) -> Option<GapSeverity> {
        match self.gap_severity.trim().to_ascii_lowercase().as_str() {
            "high" => Some(GapSeverity::High),
            "medium" => Some(GapSeverity::Medium),
            "low" => Some(GapSeverity::Low),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GapFindings {
    pub strengths_match: Vec<StrengthMatch>,
    pub gaps_identified: Vec<IdentifiedGap>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl GapFindings {
    /// Identified gaps, most severe first. Unrated gaps go last; ties keep
    /// the order the model gave.
    pub fn gaps_by_severity(&self) -> Vec<&IdentifiedGap> {
        let mut gaps: Vec<&IdentifiedGap> = self.gaps_identified.iter().collect();
        gaps.sort_by_key(|g| {
            let severity = g.severity();
            (severity.is_none(), severity)
        });
        gaps
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImmediateAction {
    pub action: String,
    pub timeline: String,
    pub method: String,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediumTermGoal {
    pub goal: String,
    pub timeline: String,
    pub steps: Vec<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImprovementPlan {
    pub immediate_actions: Vec<ImmediateAction>,
    pub medium_term_goals: Vec<MediumTermGoal>,
    pub long_term_development: Vec<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleResponse {
    pub question: String,
    pub response_approach: String,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterviewStrategy {
    pub highlight_strengths: Vec<String>,
    pub address_gaps: Vec<String>,
    pub sample_responses: Vec<SampleResponse>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Fit score as the model wrote it: `"70"` and `70` are both accepted.
/// Not range-checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FitScore {
    Number(serde_json::Number),
    Text(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GapAnalysisResult {
    pub gap_analysis: GapFindings,
    pub improvement_plan: ImprovementPlan,
    pub interview_strategy: InterviewStrategy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_fit_score: Option<FitScore>,
    pub fit_assessment: String,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl ReplyShape for GapAnalysisResult {
    const KEYS: &'static [&'static str] = &[
        "gap_analysis",
        "improvement_plan",
        "interview_strategy",
        "overall_fit_score",
        "fit_assessment",
    ];
}

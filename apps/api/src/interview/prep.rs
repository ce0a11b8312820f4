//! Interview Prep — candidate questions, answer templates, mock interviews.

use std::sync::Arc;

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::interview::difficulty::{assess_difficulty, Difficulty};
use crate::interview::prompts::{
    ANSWER_TEMPLATE_PROMPT_TEMPLATE, ANSWER_TEMPLATE_SYSTEM, EVALUATE_ANSWER_PROMPT_TEMPLATE,
    OVERALL_ASSESSMENT_PROMPT_TEMPLATE, QUESTIONS_PROMPT_TEMPLATE, QUESTIONS_SYSTEM,
};
use crate::llm_client::{
    decode_reply, gateway_error, prompt_json, ExtraFields, ModelGateway, ModelReply, ReplyShape,
};

/// Job type used by the workflow when none is known.
pub const DEFAULT_JOB_TYPE: &str = "総合職";

/// Candidate improvement areas for a mock interview.
const COMMON_ISSUES: &[&str] = &[
    "具体性の不足",
    "構成の改善",
    "企業研究の深堀り",
    "表現力の向上",
];
const IMPROVEMENT_AREA_COUNT: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub question: String,
    pub category: String,
    pub difficulty: Difficulty,
}

impl InterviewQuestion {
    fn new(question: &str, category: &str, difficulty: Difficulty) -> Self {
        Self {
            question: question.to_string(),
            category: category.to_string(),
            difficulty,
        }
    }
}

/// Requested reply shape for `generate_questions`. Field order is the
/// order questions are flattened in; categories the model adds on its own
/// follow after them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct QuestionSet {
    basic_questions: Vec<String>,
    company_specific: Vec<String>,
    industry_questions: Vec<String>,
    situational: Vec<String>,
    culture_fit: Vec<String>,
    #[serde(flatten)]
    extra: ExtraFields,
}

impl ReplyShape for QuestionSet {
    const KEYS: &'static [&'static str] = &[
        "basic_questions",
        "company_specific",
        "industry_questions",
        "situational",
        "culture_fit",
    ];
}

impl QuestionSet {
    fn flatten(self) -> Vec<InterviewQuestion> {
        let extra = self.extra.into_iter().filter_map(|(category, value)| match value {
            Value::Array(items) => {
                let questions: Vec<String> = items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(q) => Some(q),
                        _ => None,
                    })
                    .collect();
                Some((category, questions))
            }
            _ => None,
        });

        [
            ("basic_questions", self.basic_questions),
            ("company_specific", self.company_specific),
            ("industry_questions", self.industry_questions),
            ("situational", self.situational),
            ("culture_fit", self.culture_fit),
        ]
        .into_iter()
        .map(|(category, questions)| (category.to_string(), questions))
        .chain(extra)
        .flat_map(|(category, questions)| {
            questions.into_iter().map(move |q| InterviewQuestion {
                difficulty: assess_difficulty(&q),
                category: category.clone(),
                question: q,
            })
        })
        .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerTemplate {
    pub answer_template: String,
    pub key_points: Vec<String>,
    pub tips: Vec<String>,
    pub avoid: Vec<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl ReplyShape for AnswerTemplate {
    const KEYS: &'static [&'static str] = &["answer_template", "key_points", "tips", "avoid"];
}

/// Evaluation of one question/answer pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerFeedback {
    /// 1-based position in the session.
    pub question_no: usize,
    pub question: String,
    pub answer: String,
    pub feedback: ModelReply<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MockInterviewReport {
    pub individual_feedback: Vec<AnswerFeedback>,
    pub overall_assessment: String,
    pub improvement_areas: Vec<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MockInterviewError {
    #[error("質問数({questions})と回答数({answers})が一致しません")]
    LengthMismatch { questions: usize, answers: usize },
}

/// Fixed question set returned when the model reply cannot be used.
pub fn fallback_questions() -> Vec<InterviewQuestion> {
    vec![
        InterviewQuestion::new("自己紹介をお願いします", "basic", Difficulty::Low),
        InterviewQuestion::new("なぜ当社を志望するのですか？", "motivation", Difficulty::High),
        InterviewQuestion::new("あなたの強みは何ですか？", "self_pr", Difficulty::Medium),
        InterviewQuestion::new(
            "学生時代に最も力を入れたことは？",
            "experience",
            Difficulty::Medium,
        ),
        InterviewQuestion::new(
            "10年後の自分はどうなっていたいですか？",
            "career",
            Difficulty::High,
        ),
    ]
}

pub struct InterviewPrep {
    gateway: Arc<dyn ModelGateway>,
}

impl InterviewPrep {
    pub fn new(gateway: Arc<dyn ModelGateway>) -> Self {
        Self { gateway }
    }

    /// Company- and industry-specific questions. Never returns an empty list.
    pub async fn generate_questions(
        &self,
        company_name: &str,
        industry: &str,
        job_type: &str,
    ) -> Vec<InterviewQuestion> {
        let prompt = QUESTIONS_PROMPT_TEMPLATE
            .replace("{job_type}", job_type)
            .replace("{industry}", industry)
            .replace("{company_name}", company_name);

        let reply = self.gateway.generate(&prompt, Some(QUESTIONS_SYSTEM)).await;
        let questions = match decode_reply::<QuestionSet>(reply) {
            ModelReply::Success(set) => set.flatten(),
            _ => Vec::new(),
        };

        if questions.is_empty() {
            warn!("Question reply unusable for {company_name}; using fallback set");
            return fallback_questions();
        }
        info!(
            "Generated {} interview questions for {company_name}",
            questions.len()
        );
        questions
    }

    pub async fn generate_answer_template(
        &self,
        question: &str,
        user_profile: &Value,
    ) -> ModelReply<AnswerTemplate> {
        let profile_json = match prompt_json(user_profile) {
            Ok(json) => json,
            Err(e) => return ModelReply::failed(e.to_string()),
        };
        let prompt = ANSWER_TEMPLATE_PROMPT_TEMPLATE
            .replace("{user_profile_json}", &profile_json)
            .replace("{question}", question);

        let reply = self
            .gateway
            .generate(&prompt, Some(ANSWER_TEMPLATE_SYSTEM))
            .await;
        decode_reply(reply)
    }

    /// Evaluates each pair in order, then asks for an overall narrative.
    /// Mismatched lengths are rejected before any model call.
    pub async fn mock_interview_session(
        &self,
        questions: &[String],
        answers: &[String],
    ) -> Result<MockInterviewReport, MockInterviewError> {
        if questions.len() != answers.len() {
            return Err(MockInterviewError::LengthMismatch {
                questions: questions.len(),
                answers: answers.len(),
            });
        }

        let mut individual_feedback = Vec::with_capacity(questions.len());
        for (i, (question, answer)) in questions.iter().zip(answers).enumerate() {
            let feedback = self.evaluate_answer(question, answer).await;
            individual_feedback.push(AnswerFeedback {
                question_no: i + 1,
                question: question.clone(),
                answer: answer.clone(),
                feedback,
            });
        }

        let overall_assessment = self.generate_overall_assessment(&individual_feedback).await;
        let improvement_areas = identify_improvement_areas(&individual_feedback);

        Ok(MockInterviewReport {
            individual_feedback,
            overall_assessment,
            improvement_areas,
        })
    }

    /// Scores one answer on five 1–10 criteria. The reply shape is not fixed.
    pub async fn evaluate_answer(&self, question: &str, answer: &str) -> ModelReply<Value> {
        let prompt = EVALUATE_ANSWER_PROMPT_TEMPLATE
            .replace("{question}", question)
            .replace("{answer}", answer);
        let reply = self.gateway.generate(&prompt, None).await;
        decode_reply(reply)
    }

    async fn generate_overall_assessment(&self, feedback: &[AnswerFeedback]) -> String {
        let feedback_json = match prompt_json(feedback) {
            Ok(json) => json,
            Err(e) => return gateway_error(e),
        };
        let prompt = OVERALL_ASSESSMENT_PROMPT_TEMPLATE.replace("{feedback_json}", &feedback_json);
        self.gateway.generate(&prompt, None).await
    }
}

/// Placeholder: samples two distinct areas from a fixed list and ignores the
/// feedback content.
// TODO: derive areas from the lowest-scoring criteria once evaluate_answer
// has a fixed score schema.
fn identify_improvement_areas(_feedback: &[AnswerFeedback]) -> Vec<String> {
    let mut rng = rand::thread_rng();
    COMMON_ISSUES
        .choose_multiple(&mut rng, IMPROVEMENT_AREA_COUNT)
        .map(|s| s.to_string())
        .collect()
}

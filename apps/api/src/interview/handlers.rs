//! Axum route handlers for interview preparation.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{require_text, AppError};
use crate::interview::prep::{
    AnswerTemplate, InterviewPrep, InterviewQuestion, MockInterviewReport, DEFAULT_JOB_TYPE,
};
use crate::llm_client::ModelReply;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct QuestionsRequest {
    pub company_name: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default = "default_job_type")]
    pub job_type: String,
}

fn default_job_type() -> String {
    DEFAULT_JOB_TYPE.to_string()
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<InterviewQuestion>,
}

#[derive(Debug, Deserialize)]
pub struct AnswerTemplateRequest {
    pub question: String,
    pub user_profile: Value,
}

#[derive(Debug, Deserialize)]
pub struct MockSessionRequest {
    pub questions: Vec<String>,
    pub answers: Vec<String>,
}

/// POST /api/v1/interview/questions
pub async fn handle_questions(
    State(state): State<AppState>,
    Json(request): Json<QuestionsRequest>,
) -> Result<Json<QuestionsResponse>, AppError> {
    require_text("company_name", &request.company_name)?;

    let prep = InterviewPrep::new(state.gateway.clone());
    let questions = prep
        .generate_questions(&request.company_name, &request.industry, &request.job_type)
        .await;
    Ok(Json(QuestionsResponse { questions }))
}

/// POST /api/v1/interview/answer-template
pub async fn handle_answer_template(
    State(state): State<AppState>,
    Json(request): Json<AnswerTemplateRequest>,
) -> Result<Json<ModelReply<AnswerTemplate>>, AppError> {
    require_text("question", &request.question)?;

    let prep = InterviewPrep::new(state.gateway.clone());
    let reply = prep
        .generate_answer_template(&request.question, &request.user_profile)
        .await;
    Ok(Json(reply))
}

/// POST /api/v1/interview/mock-session
///
/// Questions and answers are paired by position; their counts must match.
pub async fn handle_mock_session(
    State(state): State<AppState>,
    Json(request): Json<MockSessionRequest>,
) -> Result<Json<MockInterviewReport>, AppError> {
    let prep = InterviewPrep::new(state.gateway.clone());
    let report = prep
        .mock_interview_session(&request.questions, &request.answers)
        .await
        .map_err(|e| AppError::Validation(e.to_string()))?;
    Ok(Json(report))
}

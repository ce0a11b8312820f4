//! Axum route handlers for standalone company tools.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::company::analyzer::CompanyAnalyzer;
use crate::errors::{require_text, AppError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct InterviewPointsRequest {
    pub company_name: String,
}

#[derive(Debug, Serialize)]
pub struct InterviewPointsResponse {
    pub company_name: String,
    pub interview_points: Vec<String>,
}

/// POST /api/v1/company/interview-points
///
/// Analyzes the company and returns up to five likely interview questions.
pub async fn handle_interview_points(
    State(state): State<AppState>,
    Json(request): Json<InterviewPointsRequest>,
) -> Result<Json<InterviewPointsResponse>, AppError> {
    require_text("company_name", &request.company_name)?;

    let analyzer = CompanyAnalyzer::with_source(state.gateway.clone(), state.company_source.clone());
    let interview_points = analyzer.get_interview_points(&request.company_name).await;

    Ok(Json(InterviewPointsResponse {
        company_name: request.company_name,
        interview_points,
    }))
}

//! Axum route handlers for industry matching.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{require_text, AppError};
use crate::industry::matcher::{IndustryFit, IndustryMatcher};
use crate::llm_client::ModelReply;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct IndustryFitRequest {
    pub user_profile: Value,
}

#[derive(Debug, Deserialize)]
pub struct IndustryInfoRequest {
    pub industry_name: String,
}

#[derive(Debug, Deserialize)]
pub struct MotivationTemplateRequest {
    pub industry_name: String,
    #[serde(default)]
    pub strengths: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct MotivationTemplateResponse {
    pub template: String,
}

/// POST /api/v1/industry/fit
pub async fn handle_industry_fit(
    State(state): State<AppState>,
    Json(request): Json<IndustryFitRequest>,
) -> Result<Json<ModelReply<IndustryFit>>, AppError> {
    let matcher = IndustryMatcher::new(state.gateway.clone());
    Ok(Json(matcher.analyze_fit(&request.user_profile).await))
}

/// POST /api/v1/industry/info
pub async fn handle_industry_info(
    State(state): State<AppState>,
    Json(request): Json<IndustryInfoRequest>,
) -> Result<Json<ModelReply<Value>>, AppError> {
    require_text("industry_name", &request.industry_name)?;

    let matcher = IndustryMatcher::new(state.gateway.clone());
    Ok(Json(matcher.get_industry_info(&request.industry_name).await))
}

/// POST /api/v1/industry/motivation-template
pub async fn handle_motivation_template(
    State(state): State<AppState>,
    Json(request): Json<MotivationTemplateRequest>,
) -> Result<Json<MotivationTemplateResponse>, AppError> {
    require_text("industry_name", &request.industry_name)?;

    let matcher = IndustryMatcher::new(state.gateway.clone());
    let template = matcher
        .generate_motivation_template(&request.industry_name, &request.strengths)
        .await;
    Ok(Json(MotivationTemplateResponse { template }))
}

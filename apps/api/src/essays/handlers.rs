//! Axum route handlers for the essay tools.

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{require_text, AppError};
use crate::essays::generator::{EssayCritique, EssayGenerator, SelfPr, DEFAULT_ESSAY_TYPE};
use crate::essays::templates::essay_templates;
use crate::llm_client::ModelReply;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SelfPrRequest {
    pub user_info: Value,
    pub target_company: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ImproveEssayRequest {
    pub essay_text: String,
    #[serde(default = "default_essay_type")]
    pub essay_type: String,
}

fn default_essay_type() -> String {
    DEFAULT_ESSAY_TYPE.to_string()
}

#[derive(Debug, Deserialize)]
pub struct MotivationRequest {
    pub company_info: Value,
    pub user_info: Value,
}

#[derive(Debug, Serialize)]
pub struct MotivationResponse {
    pub motivation: String,
}

#[derive(Debug, Serialize)]
pub struct TemplatesResponse {
    pub templates: BTreeMap<&'static str, &'static str>,
}

/// POST /api/v1/essays/self-pr
pub async fn handle_self_pr(
    State(state): State<AppState>,
    Json(request): Json<SelfPrRequest>,
) -> Result<Json<ModelReply<SelfPr>>, AppError> {
    let generator = EssayGenerator::new(state.gateway.clone());
    let reply = generator
        .generate_self_pr(&request.user_info, request.target_company.as_deref())
        .await;
    Ok(Json(reply))
}

/// POST /api/v1/essays/improve
///
/// Returns the scored critique, or the raw model text when it did not
/// follow the requested shape.
pub async fn handle_improve_essay(
    State(state): State<AppState>,
    Json(request): Json<ImproveEssayRequest>,
) -> Result<Json<ModelReply<EssayCritique>>, AppError> {
    require_text("essay_text", &request.essay_text)?;

    let generator = EssayGenerator::new(state.gateway.clone());
    let reply = generator
        .improve_essay(&request.essay_text, &request.essay_type)
        .await;
    Ok(Json(reply))
}

/// POST /api/v1/essays/motivation
pub async fn handle_motivation(
    State(state): State<AppState>,
    Json(request): Json<MotivationRequest>,
) -> Result<Json<MotivationResponse>, AppError> {
    let generator = EssayGenerator::new(state.gateway.clone());
    let motivation = generator
        .generate_motivation_letter(&request.company_info, &request.user_info)
        .await;
    Ok(Json(MotivationResponse { motivation }))
}

/// GET /api/v1/essays/templates
pub async fn handle_templates() -> Json<TemplatesResponse> {
    Json(TemplatesResponse {
        templates: essay_templates(),
    })
}

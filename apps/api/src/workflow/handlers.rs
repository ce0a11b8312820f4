//! Axum route handlers for workflow sessions.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::{require_text, AppError};
use crate::state::AppState;
use crate::workflow::orchestrator::{
    CompanyStage, EssaysStage, GapStage, InterviewStage, PersonalityStage, StageReport,
};
use crate::workflow::profile::UserProfile;
use crate::workflow::session::Session;
use crate::workflow::state::WorkflowSummary;

#[derive(Debug, Serialize)]
pub struct SessionCreatedResponse {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct StartWorkflowRequest {
    pub company_name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UserPersonalityRequest {
    #[serde(default)]
    pub user_info: Option<Value>,
}

async fn find_session(state: &AppState, id: Uuid) -> Result<Session, AppError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("session {id}")))
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionCreatedResponse>) {
    let session = state
        .sessions
        .create(state.gateway.clone(), state.company_source.clone())
        .await;
    (
        StatusCode::CREATED,
        Json(SessionCreatedResponse {
            session_id: session.id,
            created_at: session.created_at,
        }),
    )
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("session {id}")))
    }
}

/// PUT /api/v1/sessions/:id/profile
pub async fn handle_put_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(profile): Json<UserProfile>,
) -> Result<StatusCode, AppError> {
    let session = find_session(&state, id).await?;
    session.profile.set(profile).await;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/sessions/:id/company
pub async fn handle_start_workflow(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<StartWorkflowRequest>,
) -> Result<Json<StageReport<CompanyStage>>, AppError> {
    require_text("company_name", &request.company_name)?;

    let session = find_session(&state, id).await?;
    let mut workflow = session.workflow.lock().await;
    let report = workflow.start_workflow(&request.company_name).await?;
    Ok(Json(report))
}

/// POST /api/v1/sessions/:id/personality
///
/// Without `user_info` the session's stored profile is used.
pub async fn handle_user_personality(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Option<Json<UserPersonalityRequest>>,
) -> Result<Json<StageReport<PersonalityStage>>, AppError> {
    let request = body.map(|Json(r)| r).unwrap_or_default();

    let session = find_session(&state, id).await?;
    let mut workflow = session.workflow.lock().await;
    let report = workflow.define_user_personality(request.user_info).await?;
    Ok(Json(report))
}

/// POST /api/v1/sessions/:id/gap
pub async fn handle_gap_analysis(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StageReport<GapStage>>, AppError> {
    let session = find_session(&state, id).await?;
    let mut workflow = session.workflow.lock().await;
    Ok(Json(workflow.analyze_personality_gap().await?))
}

/// POST /api/v1/sessions/:id/essays
pub async fn handle_tailored_essays(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StageReport<EssaysStage>>, AppError> {
    let session = find_session(&state, id).await?;
    let mut workflow = session.workflow.lock().await;
    Ok(Json(workflow.generate_tailored_essays().await?))
}

/// POST /api/v1/sessions/:id/interview
pub async fn handle_interview_strategy(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StageReport<InterviewStage>>, AppError> {
    let session = find_session(&state, id).await?;
    let mut workflow = session.workflow.lock().await;
    Ok(Json(workflow.prepare_interview_strategy().await?))
}

/// GET /api/v1/sessions/:id/summary
pub async fn handle_summary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WorkflowSummary>, AppError> {
    let session = find_session(&state, id).await?;
    let workflow = session.workflow.lock().await;
    Ok(Json(workflow.summary()))
}

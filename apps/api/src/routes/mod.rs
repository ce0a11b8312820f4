pub mod health;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::company::handlers as company;
use crate::essays::handlers as essays;
use crate::industry::handlers as industry;
use crate::interview::handlers as interview;
use crate::state::AppState;
use crate::workflow::handlers as workflow;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Workflow sessions
        .route("/api/v1/sessions", post(workflow::handle_create_session))
        .route("/api/v1/sessions/:id", delete(workflow::handle_delete_session))
        .route("/api/v1/sessions/:id/profile", put(workflow::handle_put_profile))
        .route("/api/v1/sessions/:id/company", post(workflow::handle_start_workflow))
        .route(
            "/api/v1/sessions/:id/personality",
            post(workflow::handle_user_personality),
        )
        .route("/api/v1/sessions/:id/gap", post(workflow::handle_gap_analysis))
        .route("/api/v1/sessions/:id/essays", post(workflow::handle_tailored_essays))
        .route(
            "/api/v1/sessions/:id/interview",
            post(workflow::handle_interview_strategy),
        )
        .route("/api/v1/sessions/:id/summary", get(workflow::handle_summary))
        // Standalone components
        .route(
            "/api/v1/company/interview-points",
            post(company::handle_interview_points),
        )
        .route("/api/v1/essays/self-pr", post(essays::handle_self_pr))
        .route("/api/v1/essays/improve", post(essays::handle_improve_essay))
        .route("/api/v1/essays/motivation", post(essays::handle_motivation))
        .route("/api/v1/essays/templates", get(essays::handle_templates))
        .route("/api/v1/interview/questions", post(interview::handle_questions))
        .route(
            "/api/v1/interview/answer-template",
            post(interview::handle_answer_template),
        )
        .route(
            "/api/v1/interview/mock-session",
            post(interview::handle_mock_session),
        )
        .route("/api/v1/industry/fit", post(industry::handle_industry_fit))
        .route("/api/v1/industry/info", post(industry::handle_industry_info))
        .route(
            "/api/v1/industry/motivation-template",
            post(industry::handle_motivation_template),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::{Config, LlmProvider};
    use crate::llm_client::stub::ScriptedGateway;

    fn app(gateway: ScriptedGateway) -> Router {
        let config = Config {
            llm_provider: LlmProvider::Claude,
            anthropic_api_key: None,
            openai_api_key: None,
            anthropic_model: None,
            openai_model: None,
            port: 8080,
            rust_log: "info".to_string(),
            session_ttl_secs: 7200,
        };
        build_router(AppState::new(Arc::new(gateway), config))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();
        app.clone().oneshot(request).await.unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn open_session(app: &Router) -> String {
        let response = send(app, "POST", "/api/v1/sessions", None).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        json_body(response).await["session_id"]
            .as_str()
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn test_health() {
        let app = app(ScriptedGateway::always("ok"));
        let response = send(&app, "GET", "/health", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["model"], "scripted");
    }

    #[tokio::test]
    async fn test_unknown_session_is_404() {
        let app = app(ScriptedGateway::always("ok"));
        let uri = format!("/api/v1/sessions/{}/summary", uuid::Uuid::new_v4());

        let response = send(&app, "GET", &uri, None).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_out_of_order_stage_is_409() {
        let app = app(ScriptedGateway::always("ok"));
        let id = open_session(&app).await;

        let response = send(&app, "POST", &format!("/api/v1/sessions/{id}/gap"), None).await;

        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body = json_body(response).await;
        assert_eq!(body["status"], "error");
        assert!(body["error"].as_str().unwrap().contains("パーソナリティ"));
    }

    #[tokio::test]
    async fn test_blank_company_name_is_400() {
        let app = app(ScriptedGateway::always("ok"));
        let id = open_session(&app).await;

        let response = send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/company"),
            Some(json!({"company_name": " "})),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_session_runs_from_stored_profile() {
        let app = app(ScriptedGateway::new(vec![
            "企業分析",
            r#"{"company_name": "Acme"}"#,
            r#"{"strengths": ["行動力"]}"#,
        ]));
        let id = open_session(&app).await;

        let response = send(
            &app,
            "PUT",
            &format!("/api/v1/sessions/{id}/profile"),
            Some(json!({"name": "山田太郎", "gakuchika": "ボランティア"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/company"),
            Some(json!({"company_name": "Acme"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["next_step"], "user_personality_definition");

        let response = send(&app, "POST", &format!("/api/v1/sessions/{id}/personality"), None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["user_personality"]["status"], "success");

        let summary = json_body(
            send(&app, "GET", &format!("/api/v1/sessions/{id}/summary"), None).await,
        )
        .await;
        assert_eq!(summary["status"], "in_progress");
        assert_eq!(summary["workflow_summary"]["user_info"]["name"], "山田太郎");

        let response = send(&app, "DELETE", &format!("/api/v1/sessions/{id}"), None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_templates_endpoint_lists_three() {
        let app = app(ScriptedGateway::always("ok"));
        let body = json_body(send(&app, "GET", "/api/v1/essays/templates", None).await).await;

        assert_eq!(body["templates"].as_object().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_mock_session_length_mismatch_is_400() {
        let gateway = ScriptedGateway::always("ok");
        let app = app(gateway);

        let response = send(
            &app,
            "POST",
            "/api/v1/interview/mock-session",
            Some(json!({"questions": ["a", "b"], "answers": ["x"]})),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

// Integration tests for the relay HTTP surface

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use physgpt::generator::{AnswerGenerator, FALLBACK_PREFIX};
use physgpt::provider::LlmProvider;
use physgpt::server::{create_router, AppState};

struct ScriptedProvider(&'static str);

#[async_trait::async_trait]
impl LlmProvider for ScriptedProvider {
    async fn complete(&self, _prompt: &str) -> anyhow::Result<String> {
        Ok(self.0.to_string())
    }
    fn name(&self) -> &str {
        "scripted"
    }
    fn model(&self) -> &str {
        "test-model"
    }
}

struct FailingProvider;

#[async_trait::async_trait]
impl LlmProvider for FailingProvider {
    async fn complete(&self, _prompt: &str) -> anyhow::Result<String> {
        anyhow::bail!("connection refused")
    }
    fn name(&self) -> &str {
        "failing"
    }
    fn model(&self) -> &str {
        "test-model"
    }
}

fn offline_app() -> Router {
    let state = Arc::new(AppState {
        generator: AnswerGenerator::offline(),
    });
    create_router(state)
}

fn app_with(provider: impl LlmProvider + 'static) -> Router {
    let state = Arc::new(AppState {
        generator: AnswerGenerator::new(Some(Arc::new(provider))),
    });
    create_router(state)
}

async fn post_answer(app: Router, body: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/answer")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_empty_question_rejected() {
    for body in [
        "{}",
        r#"{"question": "   "}"#,
        r#"{"question": ""}"#,
        r#"{"exam": "JEE"}"#,
    ] {
        let (status, json) = post_answer(offline_app(), body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(json["error"], "Please enter a physics question.");
    }
}

#[tokio::test]
async fn test_malformed_body_tolerated() {
    // Broken JSON and non-object payloads behave like an empty payload.
    for body in ["", "null", "not json at all {{{", "[1, 2]"] {
        let (status, json) = post_answer(offline_app(), body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body:?}");
        assert_eq!(json["error"], "Please enter a physics question.");
    }
}

#[tokio::test]
async fn test_fallback_mode_answers_with_canned_response() {
    let (status, json) = post_answer(
        offline_app(),
        r#"{"question": "What is Newton's second law?", "exam": "JEE"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let answer = json["answer"].as_str().unwrap();
    assert!(answer.starts_with(FALLBACK_PREFIX));
    assert!(answer.ends_with("What is Newton's second law?"));
}

#[tokio::test]
async fn test_successful_generation_is_trimmed() {
    let app = app_with(ScriptedProvider("\n  A body at rest stays at rest.  \n"));
    let (status, json) = post_answer(app, r#"{"question": "State Newton's first law."}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["answer"], "A body at rest stays at rest.");
}

#[tokio::test]
async fn test_provider_fault_maps_to_500_with_message() {
    let app = app_with(FailingProvider);
    let (status, json) = post_answer(app, r#"{"question": "Why?"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = json["error"].as_str().unwrap();
    assert!(message.starts_with("Failed to generate answer:"));
    assert!(message.contains("connection refused"));
}

#[tokio::test]
async fn test_index_lists_exams_in_sorted_order() {
    let response = offline_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let page = String::from_utf8(bytes.to_vec()).unwrap();

    let positions: Vec<usize> = ["BITSAT", "General", "JEE", "NEET", "Olympiad"]
        .iter()
        .map(|id| {
            page.find(&format!("value=\"{id}\""))
                .unwrap_or_else(|| panic!("{id} missing from index page"))
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn test_static_script_served() {
    let response = offline_app()
        .oneshot(
            Request::builder()
                .uri("/static/app.js")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/javascript"
    );
}

// Request handlers

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;

use super::error::ApiError;
use super::AppState;
use crate::exam::Exam;
use crate::request::PhysicsRequest;

const INDEX_TEMPLATE: &str = include_str!("../../assets/index.html");
const APP_JS: &str = include_str!("../../assets/app.js");

/// Build the relay's router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route("/static/app.js", get(handle_app_js))
        .route("/api/answer", post(handle_answer))
        .with_state(state)
}

/// GET / - the selection page, listing exams in sorted order.
pub async fn handle_index() -> Html<String> {
    let options = Exam::identifiers()
        .iter()
        .map(|id| format!("          <option value=\"{id}\">{id}</option>"))
        .collect::<Vec<_>>()
        .join("\n");

    Html(INDEX_TEMPLATE.replace("{{exam_options}}", &options))
}

async fn handle_app_js() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/javascript")], APP_JS)
}

/// POST /api/answer
///
/// Absent or malformed JSON bodies are tolerated: every field defaults, and
/// the empty-question check is the only validation.
pub async fn handle_answer(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let request = PhysicsRequest::from_payload(&payload);

    if request.question.is_empty() {
        return Err(ApiError::EmptyQuestion);
    }

    let answer = state.generator.generate(&request).await?;

    Ok(Json(json!({ "answer": answer })))
}

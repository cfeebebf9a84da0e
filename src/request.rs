// Inbound request type

use serde_json::Value;

use crate::exam::Exam;

const DEFAULT_LEVEL: &str = "high-school";

/// A single physics question with its exam/level context.
///
/// Built fresh from an untyped payload per inbound call and discarded once
/// the response is produced.
#[derive(Debug, Clone)]
pub struct PhysicsRequest {
    /// Question text, trimmed. May be empty; the handler rejects that case.
    pub question: String,
    pub exam: Exam,
    pub level: String,
}

impl PhysicsRequest {
    /// Extract a request from a JSON payload. Permissive on purpose:
    /// missing, null, or non-string fields default instead of failing.
    pub fn from_payload(payload: &Value) -> Self {
        let question = payload
            .get("question")
            .and_then(Value::as_str)
            .unwrap_or("")
            .trim()
            .to_string();

        let exam = Exam::parse(payload.get("exam").and_then(Value::as_str).unwrap_or(""));

        let level = payload
            .get("level")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_LEVEL)
            .to_string();

        Self {
            question,
            exam,
            level,
        }
    }
}

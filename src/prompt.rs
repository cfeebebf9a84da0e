// Prompt composition

use crate::request::PhysicsRequest;

/// Build the tutoring instruction sent to the provider.
///
/// Pure and infallible: every field of the request has a default, so this
/// always yields a well-formed prompt. Fixed order: persona, student level,
/// exam hint, answer-structure directive, then the verbatim question.
pub fn build_prompt(request: &PhysicsRequest) -> String {
    format!(
        "You are PhysicsGPT, an expert physics tutor for competitive exams. \
         Student level: {}. \
         Exam context: {} \
         Answer with: (1) core concept, (2) step-by-step solution, \
         (3) final answer, and (4) quick exam tip. Keep language clear and friendly. \
         Question: {}",
        request.level,
        request.exam.hint(),
        request.question
    )
}

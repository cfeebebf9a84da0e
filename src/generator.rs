// Answer generation
//
// Either forwards the composed prompt to the configured provider or, when no
// credential is available, serves a canned offline answer. The offline path
// is a designed degraded mode, not an error.

use anyhow::Result;
use std::sync::Arc;

use crate::prompt::build_prompt;
use crate::provider::LlmProvider;
use crate::request::PhysicsRequest;

/// Prefix of every offline fallback answer.
pub const FALLBACK_PREFIX: &str = "I can explain this once an API key is configured.";

pub struct AnswerGenerator {
    provider: Option<Arc<dyn LlmProvider>>,
}

impl AnswerGenerator {
    pub fn new(provider: Option<Arc<dyn LlmProvider>>) -> Self {
        Self { provider }
    }

    /// A generator with no provider; always answers from the fallback.
    pub fn offline() -> Self {
        Self::new(None)
    }

    /// Produce an answer for `request`.
    ///
    /// Without a provider this never fails and never touches the network.
    /// With one, provider faults propagate unchanged to the caller.
    pub async fn generate(&self, request: &PhysicsRequest) -> Result<String> {
        let Some(provider) = &self.provider else {
            return Ok(fallback_answer(&request.question));
        };

        let prompt = build_prompt(request);

        tracing::debug!(
            provider = provider.name(),
            model = provider.model(),
            exam = request.exam.identifier(),
            "Forwarding question to provider"
        );

        let answer = provider.complete(&prompt).await?;
        Ok(answer.trim().to_string())
    }
}

fn fallback_answer(question: &str) -> String {
    format!(
        "{FALLBACK_PREFIX} \
         Set OPENAI_API_KEY to enable full oral physics answers. \
         Meanwhile, try this framing: identify known quantities, pick the \
         governing law, and solve stepwise for: {question}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exam::Exam;
    use async_trait::async_trait;

    fn request(question: &str) -> PhysicsRequest {
        PhysicsRequest {
            question: question.to_string(),
            exam: Exam::General,
            level: "high-school".to_string(),
        }
    }

    struct ScriptedProvider(&'static str);

    #[async_trait]
    impl LlmProvider for ScriptedProvider {
        async fn complete(&self, _prompt: &str) -> Result<String> {
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

    #[async_trait]
    impl LlmProvider for FailingProvider {
        async fn complete(&self, _prompt: &str) -> Result<String> {
            anyhow::bail!("connection refused")
        }
        fn name(&self) -> &str {
            "failing"
        }
        fn model(&self) -> &str {
            "test-model"
        }
    }

    #[tokio::test]
    async fn test_offline_fallback_echoes_question() {
        let generator = AnswerGenerator::offline();
        let answer = generator
            .generate(&request("What is Newton's second law?"))
            .await
            .unwrap();
        assert!(answer.starts_with(FALLBACK_PREFIX));
        assert!(answer.ends_with("What is Newton's second law?"));
    }

    #[tokio::test]
    async fn test_provider_answer_is_trimmed() {
        let generator =
            AnswerGenerator::new(Some(Arc::new(ScriptedProvider("  F = ma \n"))));
        let answer = generator.generate(&request("q")).await.unwrap();
        assert_eq!(answer, "F = ma");
    }

    #[tokio::test]
    async fn test_provider_fault_propagates() {
        let generator = AnswerGenerator::new(Some(Arc::new(FailingProvider)));
        let err = generator.generate(&request("q")).await.unwrap_err();
        assert!(err.to_string().contains("connection refused"));
    }
}

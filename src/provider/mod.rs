// Text-generation provider abstraction
//
// The relay talks to exactly one provider per process, but the trait seam
// lets tests substitute scripted or failing providers.

mod openai;

pub use openai::OpenAiProvider;

use anyhow::Result;
use async_trait::async_trait;

/// A text-generation backend reachable over HTTP.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Run one completion for `prompt` and return the generated text.
    ///
    /// One call, no retry: a fault here surfaces to the HTTP boundary as a
    /// generation failure.
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Provider name for logging (e.g., "openai").
    fn name(&self) -> &str;

    /// Model identifier sent with each request.
    fn model(&self) -> &str;
}

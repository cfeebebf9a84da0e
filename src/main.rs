// PhysicsGPT relay
// Main entry point

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;

use physgpt::config::load_config;
use physgpt::generator::AnswerGenerator;
use physgpt::provider::{LlmProvider, OpenAiProvider};
use physgpt::server;

#[derive(Parser)]
#[command(
    name = "physgpt",
    about = "Exam-aware physics tutoring relay over an OpenAI-compatible completion API"
)]
struct Args {
    /// Bind address (e.g. "127.0.0.1:8000")
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    // Load configuration
    let mut config = load_config()?;
    if let Some(bind) = args.bind {
        config.bind_address = bind;
    }

    // Create the provider client when a key is configured; otherwise the
    // generator serves offline fallback answers.
    let provider: Option<Arc<dyn LlmProvider>> = match &config.api_key {
        Some(api_key) => Some(Arc::new(OpenAiProvider::new(
            api_key.clone(),
            config.model.clone(),
        )?)),
        None => None,
    };

    let generator = AnswerGenerator::new(provider);

    server::serve(&config.bind_address, generator).await
}

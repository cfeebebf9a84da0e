// HTTP surface for the PhysicsGPT relay

mod error;
mod handlers;

pub use error::ApiError;
pub use handlers::{create_router, handle_answer, handle_index};

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::generator::AnswerGenerator;

/// Shared state handed to every handler.
pub struct AppState {
    pub generator: AnswerGenerator,
}

/// Bind and run the relay until the process is stopped.
pub async fn serve(bind_address: &str, generator: AnswerGenerator) -> Result<()> {
    let addr: SocketAddr = bind_address
        .parse()
        .with_context(|| format!("Invalid bind address: {bind_address}"))?;

    let state = Arc::new(AppState { generator });

    // Questions are short; cap bodies well below the axum default.
    let app = create_router(state)
        .layer(axum::extract::DefaultBodyLimit::max(64 * 1024))
        .layer(TraceLayer::new_for_http());

    tracing::info!("Starting PhysicsGPT relay on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

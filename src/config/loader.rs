// Configuration loader
// Reads provider credentials and overrides from environment variables

use anyhow::Result;

use super::constants::{API_KEY_ENV, DEFAULT_HTTP_ADDR, DEFAULT_MODEL, MODEL_ENV};
use super::settings::Config;

/// Load configuration from the environment.
///
/// A missing or empty API key is not an error: it switches the relay into
/// fallback mode, where answers come from a canned offline response.
pub fn load_config() -> Result<Config> {
    let api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());

    if api_key.is_none() {
        tracing::warn!(
            "{} is not set - serving offline fallback answers",
            API_KEY_ENV
        );
    }

    let model = std::env::var(MODEL_ENV)
        .ok()
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    Ok(Config {
        api_key,
        model,
        bind_address: DEFAULT_HTTP_ADDR.to_string(),
    })
}

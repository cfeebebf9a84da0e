// Project-wide constants
//
// Centralised here so env var names and other magic values have one
// source of truth. Import via `use crate::config::constants::*;`.

/// Default bind address for the relay (localhost only).
pub const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:8000";

/// Environment variable holding the provider API key.
///
/// When unset the relay serves offline fallback answers instead of
/// failing at startup.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment variable overriding the completion model.
pub const MODEL_ENV: &str = "OPENAI_MODEL";

/// Default completion model (small/fast tier).
pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";

/// Sampling temperature for answer generation. Low on purpose: factual
/// tutoring wants deterministic completions.
pub const SAMPLING_TEMPERATURE: f32 = 0.2;

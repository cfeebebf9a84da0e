// Configuration structs

/// Runtime configuration, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Provider API key. `None` selects fallback mode.
    pub api_key: Option<String>,

    /// Completion model identifier.
    pub model: String,

    /// Bind address (e.g., "127.0.0.1:8000")
    pub bind_address: String,
}

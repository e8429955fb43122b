//! Configuration for openrelay.
//!
//! All settings come from the environment (or CLI flags) and are frozen into
//! an immutable [`Config`] at startup; handlers receive it through shared
//! state rather than reading ambient globals.

use secrecy::{ExposeSecret, SecretString};
use std::path::PathBuf;

/// Default listen port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

/// Upstream chat-completions endpoint.
pub const DEFAULT_UPSTREAM_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Model identifier forced into every forwarded payload.
pub const DEFAULT_MODEL: &str = "z-ai/glm-4.5-air:free";

/// Directory for per-request log files, relative to the working directory.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Process-wide relay configuration, immutable after startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenRouter API key sent as the upstream bearer credential.
    pub api_key: ApiKey,
    /// Port to listen on.
    pub port: u16,
    /// Full URL of the upstream chat-completions endpoint.
    pub upstream_url: String,
    /// Model identifier substituted into every outbound payload.
    pub model: String,
    /// Directory that receives the prompt/response log files.
    pub log_dir: PathBuf,
}

/// API key wrapper that redacts in Debug/Display and zeroizes on drop.
///
/// The raw value is only reachable via `.expose_secret()`, so every call
/// site is auditable with a grep.
#[derive(Clone)]
pub struct ApiKey(SecretString);

impl ApiKey {
    /// Access the raw key value.
    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl std::fmt::Display for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl From<String> for ApiKey {
    fn from(s: String) -> Self {
        ApiKey(SecretString::from(s))
    }
}

impl From<&str> for ApiKey {
    fn from(s: &str) -> Self {
        ApiKey(SecretString::from(s))
    }
}

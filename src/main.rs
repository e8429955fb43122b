//! openrelay - minimal chat-completion relay for OpenRouter
//!
//! Accepts OpenAI-style chat-completion requests, logs each exchange to disk,
//! and forwards the payload to OpenRouter with a fixed model and credential.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use openrelay::config::{self, ApiKey, Config};
use openrelay::relay::run_server;

#[derive(Parser)]
#[command(name = "openrelay")]
#[command(about = "Minimal chat-completion relay for OpenRouter")]
#[command(version)]
struct Cli {
    /// OpenRouter API key sent as the upstream bearer credential
    #[arg(long, env = "OPENROUTER_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = config::DEFAULT_PORT)]
    port: u16,

    /// Model identifier substituted into every forwarded request
    #[arg(long, env = "RELAY_MODEL", default_value = config::DEFAULT_MODEL)]
    model: String,

    /// Upstream chat-completions endpoint
    #[arg(long, env = "RELAY_UPSTREAM_URL", default_value = config::DEFAULT_UPSTREAM_URL)]
    upstream_url: String,

    /// Directory for per-request log files
    #[arg(long, env = "RELAY_LOG_DIR", default_value = config::DEFAULT_LOG_DIR)]
    log_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "openrelay=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Missing OPENROUTER_API_KEY fails here, before anything binds
    let cli = Cli::parse();

    let config = Config {
        api_key: ApiKey::from(cli.api_key),
        port: cli.port,
        upstream_url: cli.upstream_url,
        model: cli.model,
        log_dir: cli.log_dir,
    };

    tracing::info!(
        port = config.port,
        model = %config.model,
        upstream = %config.upstream_url,
        log_dir = %config.log_dir.display(),
        "starting openrelay"
    );

    run_server(config).await
}

//! Storyteller Server - short story generation over HTTP.
//!
//! Accepts story descriptions on `POST /api/v1/create-story` and returns a
//! story written by an OpenAI-compatible completion service.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use storyteller_error::{ServerError, ServerErrorKind};
use storyteller_models::{ModelSpec, OpenAiClient};
use storyteller_server::{
    AppState, ConfigOverrides, DEFAULT_BASE_URL, DEFAULT_PORT, FileConfig, ObservabilityConfig,
    StorytellerConfig, create_router, init_observability_with_config,
};
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

/// Command-line arguments for the story server.
#[derive(Parser, Debug)]
#[command(name = "storyteller-server")]
#[command(about = "Storyteller Server - Short story generation service")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// API key for the completion service
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Base URL of the OpenAI-compatible API
    #[arg(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Model identifier (overrides the config file)
    #[arg(short, long, env = "STORYTELLER_MODEL")]
    model: Option<String>,

    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// List known models and exit
    #[arg(long)]
    list_models: bool,

    /// Emit JSON-formatted logs
    #[arg(long, env = "STORYTELLER_JSON_LOGS")]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();
    let args = Args::parse();

    init_observability_with_config(
        ObservabilityConfig::new("storyteller-server").with_json_logs(args.json_logs),
    )?;

    if let Err(e) = dotenv {
        debug!(error = %e, "No .env file loaded");
    }

    if args.list_models {
        for spec in ModelSpec::all() {
            println!(
                "{:<24} {:<6} {}",
                spec.id(),
                spec.style().to_string(),
                spec.description()
            );
        }
        return Ok(());
    }

    info!("Starting Storyteller Server");

    let file = match &args.config {
        Some(path) => {
            info!(config_file = ?path, "Loading configuration");
            Some(FileConfig::from_file(path)?)
        }
        None => None,
    };

    let overrides = ConfigOverrides {
        port: args.port,
        api_key: args.api_key.unwrap_or_default(),
        base_url: args.base_url,
        model: args.model,
    };
    let config = StorytellerConfig::resolve(overrides, file)?;
    info!(
        port = config.port(),
        base_url = %config.base_url(),
        model = %config.params().model(),
        style = %config.style(),
        "Configuration loaded"
    );

    let driver = OpenAiClient::new(
        config.api_key().clone(),
        config.base_url().clone(),
        config.params().clone(),
        *config.style(),
    );
    let app = create_router(AppState::new(Arc::new(driver)));

    let addr = SocketAddr::from(([0, 0, 0, 0], *config.port()));
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        ServerError::new(ServerErrorKind::Bind {
            addr: addr.to_string(),
            reason: e.to_string(),
        })
    })?;
    info!(%addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => warn!(error = %e, "Failed to listen for shutdown signal"),
    }
}

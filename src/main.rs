//! Staybook server: vacation-rental booking API.
//!
//! Main entry point that loads configuration, sets up logging and starts
//! the HTTP server.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use staybook_core::config::AppConfig;

/// Staybook booking API server
#[derive(Debug, Parser)]
#[command(name = "staybook-server", version, about, long_about = None)]
struct Cli {
    /// Configuration overlay to apply on top of config/default.toml
    #[arg(short, long, default_value = "development")]
    env: String,

    /// Replace the stored snapshot with fresh seed data
    #[arg(long)]
    reseed: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load(&cli.env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %cli.env, "Starting Staybook v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = staybook_api::run_server(config, cli.reseed).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

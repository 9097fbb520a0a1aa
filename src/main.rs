//! Ingest gateway binary.
//!
//! Loads configuration (TOML file plus `MAX_FILE_SIZE` / `NODE_ENV`
//! environment overrides), initializes logging and metrics, and serves the
//! ingest routes.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use ingest_guard::config::{self, GuardConfig};
use ingest_guard::observability::{logging, metrics};
use ingest_guard::GuardServer;

#[derive(Parser, Debug)]
#[command(name = "ingest-guard", about = "Request validation ingest gateway")]
struct Cli {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => {
            let mut defaults = GuardConfig::default();
            config::loader::apply_env_overrides(&mut defaults, |name| std::env::var(name).ok())?;
            defaults
        }
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init(&format!(
        "ingest_guard={},tower_http=info",
        config.observability.log_level
    ));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        mode = ?config.mode,
        max_file_size = config.limits.max_file_size,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let server = GuardServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

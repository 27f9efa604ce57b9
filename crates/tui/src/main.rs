//! Quartier TUI - terminal client for the Paris address analysis service.

use anyhow::{Context, Result};
use clap::{Arg, Command};
use quartier_client::AnalysisClient;
use quartier_tui::{App, Config};
use quartier_tui::config::{DEFAULT_SERVER_URL, SERVER_URL_ENV};
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // The service URL is the one piece of external configuration:
    // flag > environment > hardcoded local default.
    let default_server =
        std::env::var(SERVER_URL_ENV).unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());

    let matches = Command::new("quartier-tui")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Terminal client for the Paris address analysis service")
        .arg(
            Arg::new("server")
                .short('s')
                .long("server")
                .value_name("URL")
                .help("Analysis service URL")
                .default_value(default_server.leak() as &'static str),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Log level (trace, debug, info, warn, error)")
                .default_value("info"),
        )
        .get_matches();

    let config = Config::load(
        matches.get_one::<String>("config"),
        matches
            .get_one::<String>("server")
            .context("server argument missing")?,
        matches
            .get_one::<String>("log-level")
            .context("log-level argument missing")?,
    )?;
    config.validate()?;

    init_tracing(&config.logging.level)?;

    info!("Starting quartier TUI client");
    info!("Server: {}", config.server_url);

    test_connectivity(&config).await;

    let mut app = App::new(config)?;
    app.run().await?;

    info!("quartier TUI client shutting down");
    Ok(())
}

fn init_tracing(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .context("Failed to create tracing filter")?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}

/// Probe the service before taking over the terminal. Failure is not fatal:
/// the user may start the service later and resubmit.
async fn test_connectivity(config: &Config) {
    info!("Testing connectivity to the analysis service...");

    match AnalysisClient::new(&config.server_url) {
        Ok(client) => match client.health_check().await {
            Ok(()) => info!("✓ Analysis service reachable"),
            Err(e) => {
                warn!("⚠ Could not reach the analysis service: {}", e);
                warn!("  Make sure it is running at: {}", config.server_url);
                warn!("  Submissions will fail until it comes up.");
            }
        },
        Err(e) => warn!("⚠ Could not create probe client: {}", e),
    }
}

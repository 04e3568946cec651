//! Greeter: a single-route HTTP greeting service.
//!
//! This is the application entry point. It parses command line arguments,
//! loads configuration from a TOML file (falling back to built-in defaults),
//! initializes tracing, sets up the Axum router, and starts the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use greeter::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use greeter::http::start_server;
use greeter::routes::create_router;

/// Greeter: a single-route HTTP greeting service
#[derive(Parser, Debug)]
#[command(name = "greeter", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "greeter=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration (built-in defaults when the file does not exist)
    let config = AppConfig::load(&args.config)?;

    // Initialize tracing with filter priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    match config.logging.format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(tracing_subscriber::EnvFilter::new(&log_filter))
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(tracing_subscriber::EnvFilter::new(&log_filter))
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        "Loaded configuration"
    );

    // Create router and start server; a bind failure propagates and the
    // process exits non-zero with the error message
    let app = create_router();
    start_server(app, &config).await?;

    Ok(())
}

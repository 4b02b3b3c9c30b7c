//! People API - minimal demonstration HTTP service for person records

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use people_api::api;
use people_api::config::Config;

#[derive(Parser)]
#[command(name = "people-api")]
#[command(about = "Minimal demonstration HTTP service for person records")]
#[command(version)]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Bind address (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!("people_api={},tower_http=debug", log_level).into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    let _ = dotenvy::dotenv();

    // Load config, then apply CLI overrides
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    let addr = config.bind_addr();
    tracing::info!("Starting HTTP server on {}", addr);

    let router = api::create_router();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    println!("People API running at http://{}", addr);
    println!("  Insert:   POST http://{}/insert", addr);
    println!("  Query:    GET  http://{}/query/123", addr);
    println!("  API Docs: http://{}/docs", addr);
    println!("  Health:   http://{}/health", addr);

    axum::serve(listener, router).await?;

    Ok(())
}

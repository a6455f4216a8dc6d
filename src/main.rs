//! Server binary for the Personal Income Tax Engine.
//!
//! Loads the tax configuration once at startup and serves the calculation
//! API for the browser wizard.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tax_engine::api::{AppState, create_router};
use tax_engine::config::ConfigLoader;

#[derive(Debug, Parser)]
#[command(name = "tax-engine", version, about = "Personal income tax calculation service")]
struct Cli {
    /// Path to the tax profile configuration directory.
    #[arg(long, default_value = "./config/th-pit")]
    config: PathBuf,

    /// Address to bind the HTTP server to.
    #[arg(long, default_value = "127.0.0.1:8080")]
    listen: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let config = ConfigLoader::load(&cli.config)
        .with_context(|| format!("loading tax configuration from {}", cli.config.display()))?;

    info!(
        profile = %config.profile().name,
        years = config.config().years().len(),
        latest_year = config.latest().tax_year,
        "Tax configuration loaded"
    );

    let router = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(cli.listen)
        .await
        .with_context(|| format!("binding to {}", cli.listen))?;

    info!(listen = %cli.listen, "Serving tax calculation API");

    axum::serve(listener, router)
        .await
        .context("serving HTTP")?;

    Ok(())
}

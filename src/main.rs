mod api;
mod config;
mod db;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use api::server::AppState;
use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // Fresh in-memory stores; nothing survives a restart.
    api::server::start_server(&config, AppState::seeded()).await
}

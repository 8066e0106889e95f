//! Address Book Bot - Main entry point
//!
//! Starts an interactive session on stdin/stdout. Logs are written to stderr
//! so they never mix with the dialogue.

use address_book_bot::bot::run_session;
use address_book_bot::services::{ContactServiceImpl, SystemClock};
use address_book_bot::Config;
use anyhow::Result;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // RUST_LOG wins over the configured level
    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| Config::default().log_level);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Birthday window: {} days", config.birthday_window_days);

    // The book lives for this session only
    let mut service =
        ContactServiceImpl::new(Arc::new(SystemClock), config.birthday_window_days);

    let stdin = BufReader::new(tokio::io::stdin());
    run_session(&mut service, stdin, tokio::io::stdout(), &config.prompt).await?;

    info!("Address book bot shutdown complete");
    Ok(())
}

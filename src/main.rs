//! Address Book - Main entry point
//!
//! Loads the saved address book, runs an interactive session on stdin/stdout,
//! and saves the book when the session ends.

use address_book::repositories::{BookRepository, JsonFileRepository};
use address_book::{Config, Shell};
use anyhow::{Context, Result};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // Logging goes to stderr so stdout stays the conversation
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Using address book at {}", config.data_path.display());

    let repository = JsonFileRepository::new(&config.data_path);
    let mut book = repository.load().map_err(|e| {
        error!("Failed to load address book: {}", e);
        e
    })?;

    let stdin = io::stdin();
    let session = Shell::new().run(stdin.lock(), io::stdout(), &mut book);
    if let Err(e) = &session {
        error!("Session ended by terminal I/O error: {}", e);
    }

    // Save whatever the session changed, even if it ended early
    repository.save(&book).map_err(|e| {
        error!("Failed to save address book: {}", e);
        e
    })?;
    session?;

    info!("Session finished");
    Ok(())
}

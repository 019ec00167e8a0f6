//! Rolodex - Main entry point
//!
//! Loads the persisted directory, then hands stdin/stdout to the command
//! loop until the user closes the session.

use anyhow::{Context, Result};
use rolodex::{repl, Config, ContactStore, Dispatcher};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env().context("failed to load configuration")?;

    // Logging goes to stderr; stdout belongs to the command loop
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(data_file = %config.data_file.display(), "starting rolodex");

    let store = ContactStore::new(config.data_file.clone());
    let mut directory = store.load().with_context(|| {
        format!(
            "failed to load contacts from {}",
            config.data_file.display()
        )
    })?;
    info!(contacts = directory.len(), "directory loaded");

    let dispatcher = Dispatcher::new(config.birthday_horizon_days);
    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run(stdin.lock(), stdout.lock(), &mut directory, &store, &dispatcher)?;

    info!("rolodex shutdown complete");
    Ok(())
}

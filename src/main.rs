//! Contact Book - Main entry point
//!
//! Loads the address book from disk and runs the interactive interpreter on
//! stdin/stdout.

use anyhow::Result;
use contact_book::repositories::{AddressBookRepository, JsonFileRepository};
use contact_book::services::{ContactService, ContactServiceImpl};
use contact_book::{CommandDispatcher, Config};
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging (stderr only to keep the prompt clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Using contacts file: {}", config.contacts_file.display());

    let repository =
        Arc::new(JsonFileRepository::new(&config.contacts_file)) as Arc<dyn AddressBookRepository>;

    let service = match ContactServiceImpl::load(repository).await {
        Ok(service) => Arc::new(service) as Arc<dyn ContactService>,
        Err(e) => {
            error!("Failed to load contacts: {}", e);
            return Err(e.into());
        }
    };

    let dispatcher = CommandDispatcher::new(service, config.page_size);

    contact_book::repl::run(&dispatcher, BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await?;

    info!("Contact book session ended");
    Ok(())
}

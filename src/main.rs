use crate::config::Config;
use crate::domain::storage::Storage;
use crate::error::Result;
use crate::infrastructure::{FileSystemStore, PushFeedClient};
use crate::services::{FixtureService, RefreshScheduler, ScorerService, ScrapingService};
use std::sync::Arc;

mod config;
mod domain;
mod error;
mod infrastructure;
mod server;
mod services;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::new()?;
    config.ensure_directories()?;

    let store: Arc<dyn Storage> = Arc::new(FileSystemStore::new(&config.args.data_dir));
    let scraping = ScrapingService::new(config.http_client.clone())?;
    let scorers = ScorerService::new(PushFeedClient::new(config.http_client.clone()));
    let service = Arc::new(FixtureService::new(scraping, scorers, store));

    let mut scheduler = RefreshScheduler::new(
        Arc::clone(&service),
        config.refresh_interval(),
        config.args.window_days,
    );
    if !config.args.no_refresh {
        scheduler.start();
    }

    server::serve(config.args.listen_addr, service).await?;

    scheduler.stop();
    Ok(())
}

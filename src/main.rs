//! meetcache - cache-backed attendance reports for a Meetup group.
//!
//! Fetches the group's past events and per-event attendance (served
//! from the local cache when available), counts attendance per member
//! from the milestone meetup onward, and prints who the Regulars and
//! Almost Regulars are.

mod aggregate;
mod api;
mod cache;
mod config;
mod fetch;
mod filter;
mod models;
mod report;

use std::io;

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use api::{ApiClient, RemoteEventService};
use cache::FileStore;
use config::Config;
use fetch::CachedFetcher;

/// Initialize the tracing subscriber for logging.
/// Use RUST_LOG to control the level (e.g. RUST_LOG=debug).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("meetcache=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let config = Config::load()?;
    let Some(api_key) = config.api_key() else {
        anyhow::bail!("set MEETUP_API_KEY in the environment or api_key in the config file");
    };

    let group = config.group_urlname();
    info!(group = %group, "meetcache starting");

    let store = FileStore::new(config.cache_dir()?)?;
    let fetcher = CachedFetcher::new(store);
    let client = ApiClient::new(api_key)?;

    let events = fetcher
        .fetch("events", || client.events(&group, "past"))
        .await?;

    let selected = filter::since_milestone(events.results);
    info!(count = selected.len(), "events at or after the milestone");

    match aggregate::aggregate(&fetcher, &client, &group, &selected).await {
        Ok(ranking) => {
            report::write_report(&mut io::stdout().lock(), &ranking)?;
            Ok(())
        }
        Err(e) => {
            // One failed event fetch fails the whole run; surface it
            // instead of printing a partial report.
            error!(error = %e, "attendance aggregation failed");
            Err(e.into())
        }
    }
}

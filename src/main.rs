use std::time::Duration;

use iss_tracker::{Config, IssClient, Tracker};
use reqwest::Url;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load configuration
    let config = Config::from_env()?;

    let url = Url::parse(&config.iss_url)?;
    let client =
        IssClient::with_url_and_timeout(url, Duration::from_secs(config.request_timeout_secs));

    // A zero refresh interval means a single fetch.
    if config.refresh_interval_secs == 0 {
        let location = client.fetch_location().await?;
        println!("{}", serde_json::to_string(&location)?);
        return Ok(());
    }

    let mut tracker = Tracker::start(client, Duration::from_secs(config.refresh_interval_secs));

    while let Some(update) = tracker.recv().await {
        match update {
            Ok(location) => println!("{}", serde_json::to_string(&location)?),
            Err(e) => tracing::error!("ISS fetch failed: {}", e),
        }
    }

    Ok(())
}

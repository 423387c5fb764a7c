//! CLI entry point for the workshop item ID scraper.

use std::time::Duration;

use clap::Parser;
use tracing::error;

use workshop_certis::infrastructure::config::{defaults, CrawlerConfig};
use workshop_certis::infrastructure::logging::init_logging;
use workshop_certis::{CrawlRequest, CrawlSession};

/// Enumerate every workshop item ID of a Steam game into a flat text file.
#[derive(Parser, Debug)]
#[command(name = "workshop-certis", version, about)]
struct Args {
    /// ID of the game
    #[arg(long)]
    app_id: String,

    /// Which workshop page to start at
    #[arg(long, default_value_t = 1)]
    start_page: u32,

    /// Which workshop page to end at (0 = last discovered page)
    #[arg(long, default_value_t = 0)]
    end_page: u32,

    /// Delay between each request, in milliseconds
    #[arg(long, default_value_t = defaults::REQUEST_DELAY_MS)]
    delay_ms: u64,

    /// Upper bound of an extra randomized delay added on top, in milliseconds
    #[arg(long, default_value_t = defaults::RANDOM_JITTER_MS)]
    jitter_ms: u64,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = init_logging() {
        eprintln!("failed to initialize logging: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run(args).await {
        error!("{e:#}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let request = CrawlRequest::new(
        &args.app_id,
        args.start_page,
        args.end_page,
        Duration::from_millis(args.delay_ms),
        Duration::from_millis(args.jitter_ms),
    )?;

    let config = CrawlerConfig::default();
    let session = CrawlSession::new(&config, request)?;
    session.run().await?;

    Ok(())
}

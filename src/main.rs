//! Auction Showcase - BigONE auction to PRESS.one collection sync
//!
//! Runs once over every configured auction and exits.

use auction_showcase::{Settings, Syncer};
use clap::Parser;

/// Publish BigONE NFT auctions and their bids to PRESS.one
#[derive(Parser, Debug)]
#[command(name = "auction_showcase")]
#[command(version, about, long_about = None)]
struct Args {
    /// Config file name, the extension may be omitted (config.yaml, config.toml, ...)
    #[arg(short, long, default_value = "config")]
    config: String,

    /// Fetch and build requests but do not publish them
    #[arg(long, default_value_t = false)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let settings = match Settings::load(&args.config) {
        Ok(settings) => {
            log::info!(
                "Loaded configuration with {} auction(s)",
                settings.auctions.len()
            );
            settings
        }
        Err(e) => {
            log::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if args.dry_run {
        log::info!("Dry run: collections will not be published");
    }

    match Syncer::new(&settings).dry_run(args.dry_run).run().await {
        Ok(summary) => {
            log::info!("Sync completed: {} auction(s) processed", summary.processed);
        }
        Err(e) => {
            log::error!("Sync failed: {}", e);
            std::process::exit(1);
        }
    }
}

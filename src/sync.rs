//! Auction sync driver
//!
//! Processes configured auctions one after another: fetch detail, list bids,
//! build the collection request, publish. The first failure stops the run.

use crate::bigone::BigOneClient;
use crate::error::Result;
use crate::press::PressClient;
use crate::settings::{AuctionSettings, Settings};
use crate::showcase::build_collection;

/// Outcome of a completed run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SyncSummary {
    /// Auctions fully processed: published, or built only in dry-run mode
    pub processed: usize,
    /// Showcase URLs returned by PRESS.one, in auction order
    pub showcase_urls: Vec<String>,
}

pub struct Syncer<'a> {
    settings: &'a Settings,
    bigone: BigOneClient,
    press: PressClient,
    dry_run: bool,
}

impl<'a> Syncer<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            bigone: BigOneClient::new(&settings.app.bigone_url),
            press: PressClient::new(&settings.app.authorization_token),
            dry_run: false,
        }
    }

    /// Build and log requests without posting them
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Replace the PRESS.one client (e.g. to target another endpoint)
    pub fn with_press(mut self, press: PressClient) -> Self {
        self.press = press;
        self
    }

    /// Sync every configured auction in order, stopping at the first error
    pub async fn run(&self) -> Result<SyncSummary> {
        let total = self.settings.auctions.len();
        let mut summary = SyncSummary::default();

        for (index, auction) in self.settings.auctions.iter().enumerate() {
            log::info!(
                "Syncing auction {} ({}/{})",
                auction.uuid,
                index + 1,
                total
            );

            let showcase_url = self
                .sync_auction(auction)
                .await
                .map_err(|e| e.for_auction(&auction.uuid))?;

            summary.processed += 1;
            summary.showcase_urls.extend(showcase_url);
        }

        Ok(summary)
    }

    /// Sync a single auction, returning the showcase URL if one was issued
    pub async fn sync_auction(&self, auction_settings: &AuctionSettings) -> Result<Option<String>> {
        let (auction, goods) = self
            .bigone
            .fetch_auction_detail(&auction_settings.uuid)
            .await?;
        let bids = self.bigone.list_bids(&auction_settings.uuid).await?;

        log::info!(
            "Fetched goods {} with {} attachment(s) and {} bid(s)",
            goods.guid,
            goods.template.attachments.len(),
            bids.len()
        );

        let request = build_collection(
            auction_settings,
            &self.settings.app.asset_host,
            &auction,
            &goods,
            &bids,
        );

        if self.dry_run {
            log::info!(
                "[DRY RUN] Would publish: {}",
                serde_json::to_string(&request)?
            );
            return Ok(None);
        }

        self.press.publish(&request).await
    }
}

//! Auction Showcase - BigONE auction to PRESS.one collection sync
//!
//! Reads configured auctions, fetches their details and bids from BigONE and
//! publishes them as PRESS.one collections.

pub mod bigone;
pub mod error;
pub mod press;
pub mod settings;
pub mod showcase;
pub mod sync;

pub use error::{Error, Result};
pub use settings::{AppSettings, AuctionSettings, Settings};
pub use sync::{SyncSummary, Syncer};

//! Configuration loading
//!
//! Settings come from a single file (`config.yaml`, `config.toml`, ...) read once at
//! startup and then passed by reference to every component.

use crate::error::Result;
use config::{Config, File, FileFormat};
use serde::Deserialize;

/// Process-wide endpoints and credentials
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AppSettings {
    /// Sent verbatim as `Authorization: Basic {token}` to PRESS.one
    pub authorization_token: String,
    /// Base URL of the BigONE API
    pub bigone_url: String,
    /// Prefix for media attachment URLs
    pub asset_host: String,
}

/// One auction to mirror
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AuctionSettings {
    /// BigONE auction UUID
    pub uuid: String,
    pub contract_address: String,
    pub token_id: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub app: AppSettings,
    pub auctions: Vec<AuctionSettings>,
}

impl Settings {
    /// Load settings from a config file.
    ///
    /// `name` may omit the extension, in which case any supported format
    /// (`.yaml`, `.toml`, `.json`, ...) found next to it is used.
    pub fn load(name: &str) -> Result<Self> {
        log::debug!("Loading configuration from: {}", name);

        let settings = Config::builder()
            .add_source(File::with_name(name))
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }

    /// Parse settings from an in-memory document
    pub fn from_document(text: &str, format: FileFormat) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::from_str(text, format))
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;

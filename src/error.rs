//! Error types for auction_showcase

use std::fmt;

/// Unified error type for auction_showcase operations
#[derive(Debug)]
pub enum ShowcaseError {
    /// Configuration file missing, malformed or incomplete
    Config(config::ConfigError),
    /// HTTP request failed (connection refused, body read failure, etc.)
    Network(reqwest::Error),
    /// Failed to parse or serialize JSON
    Parse(serde_json::Error),
    /// Processing of one configured auction failed
    Auction { uuid: String, source: Box<ShowcaseError> },
}

pub type Error = ShowcaseError;

impl fmt::Display for ShowcaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShowcaseError::Config(e) => write!(f, "Config error: {}", e),
            ShowcaseError::Network(e) => write!(f, "Network error: {}", e),
            ShowcaseError::Parse(e) => write!(f, "Parse error: {}", e),
            ShowcaseError::Auction { uuid, source } => {
                write!(f, "Auction {} failed: {}", uuid, source)
            }
        }
    }
}

impl std::error::Error for ShowcaseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShowcaseError::Config(e) => Some(e),
            ShowcaseError::Network(e) => Some(e),
            ShowcaseError::Parse(e) => Some(e),
            ShowcaseError::Auction { source, .. } => Some(source.as_ref()),
        }
    }
}

impl From<config::ConfigError> for ShowcaseError {
    fn from(err: config::ConfigError) -> Self {
        ShowcaseError::Config(err)
    }
}

impl From<reqwest::Error> for ShowcaseError {
    fn from(err: reqwest::Error) -> Self {
        ShowcaseError::Network(err)
    }
}

impl From<serde_json::Error> for ShowcaseError {
    fn from(err: serde_json::Error) -> Self {
        ShowcaseError::Parse(err)
    }
}

impl ShowcaseError {
    /// Attach the auction UUID the error occurred for
    pub fn for_auction(self, uuid: &str) -> Self {
        ShowcaseError::Auction {
            uuid: uuid.to_string(),
            source: Box::new(self),
        }
    }
}

/// Result alias for auction_showcase operations
pub type Result<T> = std::result::Result<T, ShowcaseError>;

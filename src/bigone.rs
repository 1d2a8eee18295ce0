//! BigONE NFT API client for fetching auction details and bids
//!
//! Uses async reqwest. Responses are decoded leniently: any missing or `null`
//! body, object, list item or string decodes to its empty value, so only
//! malformed JSON (or a value of the wrong type) is reported as a parse error.

use crate::error::Result;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

const USER_AGENT: &str = "auction_showcase/1.0";

/// Treat an explicit `null` the same as an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Like `null_as_default`, and also decode `null` list items as empty values
fn null_items_as_default<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let items = Option::<Vec<Option<T>>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(items.into_iter().map(Option::unwrap_or_default).collect())
}

/// Asset an auction is priced in
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Asset {
    #[serde(default, deserialize_with = "null_as_default")]
    pub uuid: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub symbol: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Auction {
    #[serde(default, deserialize_with = "null_as_default")]
    pub asset: Asset,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Attachment {
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Template {
    #[serde(default, deserialize_with = "null_items_as_default")]
    pub attachments: Vec<Attachment>,
}

/// The digital collectible being auctioned
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Goods {
    #[serde(default, deserialize_with = "null_as_default")]
    pub guid: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub template: Template,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BidUser {
    #[serde(default, deserialize_with = "null_as_default")]
    pub guid: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nickname: String,
}

/// A single bid. `price` is kept as the decimal string BigONE sends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Bid {
    #[serde(default, deserialize_with = "null_as_default")]
    pub user: BidUser,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
}

#[derive(Debug, Default, Deserialize)]
struct DetailData {
    #[serde(default, deserialize_with = "null_as_default")]
    auction: Auction,
    #[serde(default, deserialize_with = "null_as_default")]
    goods: Goods,
}

#[derive(Debug, Default, Deserialize)]
struct DetailResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    data: DetailData,
}

#[derive(Debug, Default, Deserialize)]
struct BidsData {
    #[serde(default, deserialize_with = "null_items_as_default")]
    bids: Vec<Bid>,
}

#[derive(Debug, Default, Deserialize)]
struct BidsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    data: BidsData,
}

/// Read-only client for the BigONE NFT auction endpoints
pub struct BigOneClient {
    client: Client,
    base_url: String,
}

impl BigOneClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.to_string(),
        }
    }

    fn auction_url(&self, uuid: &str, resource: &str) -> String {
        format!(
            "{}/api/nft/v1/auctions/{}/{}",
            self.base_url,
            urlencoding::encode(uuid),
            resource
        )
    }

    /// Fetch an auction and the goods it sells
    pub async fn fetch_auction_detail(&self, uuid: &str) -> Result<(Auction, Goods)> {
        let url = self.auction_url(uuid, "detail");
        let response: DetailResponse = self.get_json(&url).await?;
        Ok((response.data.auction, response.data.goods))
    }

    /// List bids on an auction, in the order BigONE returns them
    pub async fn list_bids(&self, uuid: &str) -> Result<Vec<Bid>> {
        let url = self.auction_url(uuid, "bids");
        let response: BidsResponse = self.get_json(&url).await?;
        Ok(response.data.bids)
    }

    /// A `null` body decodes to the empty response
    async fn get_json<T: DeserializeOwned + Default>(&self, url: &str) -> Result<T> {
        log::debug!("Fetching from BigONE: {}", url);

        let response = self
            .client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("BigONE responded with HTTP {} for {}", status, url);
        }

        let body = response.text().await?;
        let decoded: Option<T> = serde_json::from_str(&body)?;
        Ok(decoded.unwrap_or_default())
    }
}

#[cfg(test)]
#[path = "bigone_tests.rs"]
mod tests;

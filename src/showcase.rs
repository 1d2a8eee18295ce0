//! Mapping of BigONE auction data onto the PRESS.one collection schema

use crate::bigone::{Auction, Bid, Goods};
use crate::settings::AuctionSettings;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Media {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DigitalCollectible {
    /// BigONE goods GUID, not the auction UUID
    pub uuid: String,
    pub contract_address: String,
    pub token_id: String,
    pub media: Vec<Media>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Unit {
    pub uuid: String,
    pub symbol: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Price {
    /// Decimal string, passed through untouched
    pub value: String,
    pub unit: Unit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Holder {
    pub uuid: String,
    pub nickname: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BidRequest {
    pub price: Price,
    pub holder: Holder,
    pub bid_at: String,
}

/// Request body for `POST /api/v2/nft/collections`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionRequest {
    pub digital_collectibles: DigitalCollectible,
    pub bids: Vec<BidRequest>,
}

/// Build the PRESS.one request for one auction.
///
/// Attachment and bid order is preserved; every bid is priced in the auction's asset.
pub fn build_collection(
    auction_settings: &AuctionSettings,
    asset_host: &str,
    auction: &Auction,
    goods: &Goods,
    bids: &[Bid],
) -> CollectionRequest {
    let media = goods
        .template
        .attachments
        .iter()
        .map(|attachment| Media {
            url: format!("{}/{}", asset_host, attachment.path),
        })
        .collect();

    let bids = bids
        .iter()
        .map(|bid| BidRequest {
            price: Price {
                value: bid.price.clone(),
                unit: Unit {
                    uuid: auction.asset.uuid.clone(),
                    symbol: auction.asset.symbol.clone(),
                },
            },
            holder: Holder {
                uuid: bid.user.guid.clone(),
                nickname: bid.user.nickname.clone(),
            },
            bid_at: bid.created_at.clone(),
        })
        .collect();

    CollectionRequest {
        digital_collectibles: DigitalCollectible {
            uuid: goods.guid.clone(),
            contract_address: auction_settings.contract_address.clone(),
            token_id: auction_settings.token_id.clone(),
            media,
        },
        bids,
    }
}

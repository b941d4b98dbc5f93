//! JSON output formatting.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use wowah_core::{AccessToken, Auction, ItemRecord, Money, TimeLeft};

// ============================================================================
// Output Types
// ============================================================================

/// JSON output for an access token.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenOutput {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// JSON output for one auction, optionally with the resolved item.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionOutput {
    pub id: u64,
    pub item_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_class_id: Option<u32>,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyout: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bid: Option<Money>,
    pub time_left: TimeLeft,
}

// ============================================================================
// JSON Formatter
// ============================================================================

/// JSON formatter.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Formats any serializable data.
    pub fn format<T: Serialize + ?Sized>(&self, data: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(data)?
        } else {
            serde_json::to_string(data)?
        };
        Ok(json)
    }

    /// Formats an access token, masked unless `reveal` is set.
    pub fn format_token(&self, token: &AccessToken, reveal: bool) -> Result<String> {
        let output = TokenOutput {
            token: if reveal {
                token.secret().to_string()
            } else {
                token.masked()
            },
            expires_at: token.expires_at(),
        };
        self.format(&output)
    }

    /// Formats auctions joined with their resolved items.
    pub fn format_auctions(
        &self,
        auctions: &[Auction],
        items: &HashMap<u64, ItemRecord>,
    ) -> Result<String> {
        let output: Vec<AuctionOutput> = auctions
            .iter()
            .map(|auction| auction_output(auction, items.get(&auction.item.id)))
            .collect();
        self.format(&output)
    }
}

/// Builds the JSON view of an auction.
pub fn auction_output(auction: &Auction, item: Option<&ItemRecord>) -> AuctionOutput {
    AuctionOutput {
        id: auction.id,
        item_id: auction.item.id,
        item_name: item.map(|i| i.name.clone()),
        item_class_id: item.and_then(|i| i.classid),
        quantity: auction.quantity,
        unit_price: auction.price_per_unit(),
        buyout: auction.buyout,
        bid: auction.bid,
        time_left: auction.time_left,
    }
}

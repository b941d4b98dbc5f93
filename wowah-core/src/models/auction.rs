//! Auction-house listing types.
//!
//! - [`AuctionsResponse`] - Listing of a connected realm's auction house
//! - [`Auction`] - A single auction
//! - [`TimeLeft`] - Remaining-duration bucket
//! - [`ItemBatchRequest`] - Caller-supplied batch for item enrichment

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::money::Money;

// ============================================================================
// Time Left
// ============================================================================

/// Remaining duration of an auction, as reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeLeft {
    /// Less than 30 minutes.
    Short,
    /// 30 minutes to 2 hours.
    Medium,
    /// 2 to 12 hours.
    Long,
    /// 12 to 48 hours.
    VeryLong,
}

impl TimeLeft {
    /// Short human-readable range.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Short => "<30m",
            Self::Medium => "30m-2h",
            Self::Long => "2h-12h",
            Self::VeryLong => "12h-48h",
        }
    }
}

impl fmt::Display for TimeLeft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// Auctions
// ============================================================================

/// Item reference inside an auction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionItemRef {
    /// Item identifier.
    pub id: u64,
    /// Bonus list ids applied to the item.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bonus_lists: Vec<u32>,
    /// Item context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<u32>,
}

/// A single auction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auction {
    /// Auction identifier.
    pub id: u64,
    /// The item for sale.
    pub item: AuctionItemRef,
    /// Buyout price for the whole stack.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buyout: Option<Money>,
    /// Current bid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bid: Option<Money>,
    /// Per-unit price (commodities).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Money>,
    /// Stack size.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Remaining duration bucket.
    pub time_left: TimeLeft,
}

fn default_quantity() -> u32 {
    1
}

impl Auction {
    /// Price of a single unit: the unit price when present, otherwise the
    /// buyout divided by the stack size.
    pub fn price_per_unit(&self) -> Option<Money> {
        if let Some(unit) = self.unit_price {
            return Some(unit);
        }
        let buyout = self.buyout?;
        let quantity = u64::from(self.quantity.max(1));
        Some(Money(buyout.0 / quantity))
    }
}

/// Response of `/connected-realm/{id}/auctions`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuctionsResponse {
    /// Every auction currently listed.
    #[serde(default)]
    pub auctions: Vec<Auction>,
}

impl AuctionsResponse {
    /// Unique item ids across the listing.
    pub fn item_ids(&self) -> BTreeSet<u64> {
        self.auctions.iter().map(|a| a.item.id).collect()
    }

    /// Auctions of one item, cheapest unit price first.
    ///
    /// Bid-only auctions (no unit price) come last. Ties keep listing order.
    pub fn for_item(&self, item_id: u64) -> Vec<Auction> {
        let mut matching: Vec<Auction> = self
            .auctions
            .iter()
            .filter(|a| a.item.id == item_id)
            .cloned()
            .collect();
        matching.sort_by_key(|a| (a.price_per_unit().is_none(), a.price_per_unit()));
        matching
    }
}

// ============================================================================
// Enrichment Batch
// ============================================================================

/// Item reference as sent by callers; only the id is read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchItem {
    /// Item identifier.
    #[serde(default)]
    pub id: Option<u64>,
}

/// Auction entry as sent by callers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchEntry {
    /// The referenced item.
    #[serde(default)]
    pub item: Option<BatchItem>,
}

/// Body of a batch enrichment request: `{ "auctions": [{ "item": { "id": .. } }] }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemBatchRequest {
    /// Auction entries whose items should be resolved.
    pub auctions: Vec<BatchEntry>,
}

impl ItemBatchRequest {
    /// Unique, non-zero item ids referenced by the batch.
    pub fn item_ids(&self) -> BTreeSet<u64> {
        self.auctions
            .iter()
            .filter_map(|entry| entry.item.as_ref()?.id)
            .filter(|id| *id != 0)
            .collect()
    }
}

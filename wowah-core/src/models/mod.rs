//! Domain models for wowah.
//!
//! ## Submodules
//!
//! - [`token`] - OAuth access tokens
//! - [`item`] - Item records, localized names, item classes
//! - [`auction`] - Auction listings and enrichment batches
//! - [`realm`] - Connected realms
//! - [`search`] - Item search results
//! - [`money`] - Gold/silver/copper amounts
//! - [`region`] - Battle.net regions

mod auction;
mod item;
mod money;
mod realm;
mod region;
mod search;
mod token;

pub use auction::{
    Auction, AuctionItemRef, AuctionsResponse, BatchEntry, BatchItem, ItemBatchRequest, TimeLeft,
};
pub use item::{
    resolve_name_value, ItemClass, ItemClassIndex, ItemClassRef, ItemClassSummary, ItemRecord,
    ItemSubclassRef, LocalizedName, RecordSource, UNKNOWN_ITEM_NAME,
};
pub use money::Money;
pub use realm::{ConnectedRealm, ConnectedRealmIndex, LinkRef, RealmSummary, TypedValue};
pub use region::Region;
pub use search::{IdRef, ItemSearchHit, ItemSearchPage, ItemSearchResponse, SearchItemData, SearchResult};
pub use token::{AccessToken, TokenResponse, DEFAULT_TOKEN_LIFETIME_SECS, MAX_TOKEN_LIFETIME_SECS};
#[cfg(test)]
mod serde_tests;

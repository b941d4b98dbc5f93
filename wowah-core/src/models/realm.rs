//! Connected realm types.

use serde::{Deserialize, Serialize};

use super::item::LocalizedName;

/// Marker preceding the id in connected realm hrefs.
const CONNECTED_REALM_SEGMENT: &str = "connected-realm/";

/// A `{ "href": .. }` link.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LinkRef {
    /// Target URL.
    pub href: String,
}

impl LinkRef {
    /// Extracts the connected realm id from an href such as
    /// `https://kr.api.blizzard.com/data/wow/connected-realm/205?namespace=dynamic-kr`.
    pub fn connected_realm_id(&self) -> Option<u32> {
        let start = self.href.find(CONNECTED_REALM_SEGMENT)? + CONNECTED_REALM_SEGMENT.len();
        let digits: String = self.href[start..]
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();
        digits.parse().ok()
    }
}

/// Response of `/connected-realm/index`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConnectedRealmIndex {
    /// Links to every connected realm.
    #[serde(default)]
    pub connected_realms: Vec<LinkRef>,
}

impl ConnectedRealmIndex {
    /// Connected realm ids, skipping links that do not carry one.
    pub fn ids(&self) -> Vec<u32> {
        self.connected_realms
            .iter()
            .filter_map(LinkRef::connected_realm_id)
            .collect()
    }
}

/// A `{ "type": .., "name": .. }` enumeration value.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TypedValue {
    /// Machine-readable value, e.g. `UP` or `FULL`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<LocalizedName>,
}

/// Member realm of a connected realm.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RealmSummary {
    /// Realm id.
    pub id: u32,
    /// Realm name.
    pub name: LocalizedName,
    /// URL slug.
    #[serde(default)]
    pub slug: Option<String>,
    /// Realm timezone.
    #[serde(default)]
    pub timezone: Option<String>,
}

/// Response of `/connected-realm/{id}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConnectedRealm {
    /// Connected realm id.
    pub id: u32,
    /// Whether a login queue is active.
    #[serde(default)]
    pub has_queue: bool,
    /// Up/down status.
    #[serde(default)]
    pub status: Option<TypedValue>,
    /// Population bucket.
    #[serde(default)]
    pub population: Option<TypedValue>,
    /// Member realms.
    #[serde(default)]
    pub realms: Vec<RealmSummary>,
}

impl ConnectedRealm {
    /// Member realm names in `locale`.
    pub fn realm_names(&self, locale: &str) -> Vec<String> {
        self.realms
            .iter()
            .map(|realm| realm.name.resolve_or_unknown(locale))
            .collect()
    }
}

//! Item types.
//!
//! - [`ItemRecord`] - Enriched `{id, name, classid}` view of an item
//! - [`LocalizedName`] - Game Data API name field (plain or locale-keyed)
//! - [`ItemClassSummary`], [`ItemClass`] - Item class index and detail

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Name reported for items that could not be resolved.
pub const UNKNOWN_ITEM_NAME: &str = "Unknown";

// ============================================================================
// Localized Names
// ============================================================================

/// A `name` field from the Game Data API.
///
/// Requests made with a `locale` parameter return a plain string; requests
/// without one return an object keyed by locale (`{"en_US": .., "ko_KR": ..}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedName {
    /// Already resolved to a single locale.
    Text(String),
    /// Every locale the API knows about.
    Localized(BTreeMap<String, Option<String>>),
}

impl LocalizedName {
    /// Resolves the name for `locale`.
    ///
    /// A locale-keyed object yields the configured locale's entry; a plain
    /// string is returned as-is. Anything else is `None`.
    pub fn resolve(&self, locale: &str) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()).filter(|s| !s.is_empty()),
            Self::Localized(names) => names
                .get(locale)
                .and_then(Option::as_deref)
                .filter(|s| !s.is_empty()),
        }
    }

    /// Like [`resolve`](Self::resolve), falling back to [`UNKNOWN_ITEM_NAME`].
    pub fn resolve_or_unknown(&self, locale: &str) -> String {
        self.resolve(locale).unwrap_or(UNKNOWN_ITEM_NAME).to_string()
    }
}

/// Resolves a raw JSON `name` value for `locale`.
pub fn resolve_name_value(value: Option<&Value>, locale: &str) -> Option<String> {
    match value? {
        Value::Object(names) => names
            .get(locale)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        _ => None,
    }
}

// ============================================================================
// Item Record
// ============================================================================

/// Where an [`ItemRecord`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordSource {
    /// Read from the on-disk memo store.
    Cache,
    /// Fetched from the upstream item endpoint.
    Network,
    /// Could not be resolved.
    Unresolved,
}

/// Enrichment result for a single item.
///
/// Serializes to the caller-facing `{ "id", "name", "classid" }` shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRecord {
    /// Item identifier.
    pub id: u64,
    /// Display name in the configured locale.
    pub name: String,
    /// Item class identifier, if known.
    pub classid: Option<u32>,
    /// Provenance of this record.
    #[serde(skip)]
    pub source: RecordSource,
}

impl ItemRecord {
    /// Extracts a record from a raw item response.
    pub fn from_raw(id: u64, raw: &Value, locale: &str, source: RecordSource) -> Self {
        let name = resolve_name_value(raw.get("name"), locale)
            .unwrap_or_else(|| UNKNOWN_ITEM_NAME.to_string());

        let classid = raw
            .get("item_class")
            .and_then(|class| class.get("id"))
            .and_then(Value::as_u64)
            .and_then(|id| u32::try_from(id).ok());

        Self {
            id,
            name,
            classid,
            source,
        }
    }

    /// Placeholder for an item whose enrichment failed.
    pub fn unresolved(id: u64) -> Self {
        Self {
            id,
            name: UNKNOWN_ITEM_NAME.to_string(),
            classid: None,
            source: RecordSource::Unresolved,
        }
    }

    /// True unless this is an unresolved placeholder.
    pub fn is_resolved(&self) -> bool {
        self.source != RecordSource::Unresolved
    }
}

// ============================================================================
// Item Classes
// ============================================================================

/// Entry of the item class index.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ItemClassRef {
    /// Class identifier.
    pub id: u32,
    /// Class name.
    pub name: LocalizedName,
}

/// Response of `/item-class/index`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ItemClassIndex {
    /// All item classes.
    #[serde(default)]
    pub item_classes: Vec<ItemClassRef>,
}

/// Item class with its name flattened to one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemClassSummary {
    /// Class identifier.
    pub id: u32,
    /// Class name.
    pub name: String,
}

impl ItemClassIndex {
    /// Flattens every class name to `locale`.
    pub fn summaries(&self, locale: &str) -> Vec<ItemClassSummary> {
        self.item_classes
            .iter()
            .map(|class| ItemClassSummary {
                id: class.id,
                name: class.name.resolve_or_unknown(locale),
            })
            .collect()
    }
}

/// Subclass entry of an item class.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ItemSubclassRef {
    /// Subclass identifier.
    pub id: u32,
    /// Subclass name.
    pub name: LocalizedName,
}

/// Response of `/item-class/{id}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ItemClass {
    /// Class identifier.
    pub class_id: u32,
    /// Class name.
    pub name: LocalizedName,
    /// Subclasses of this class.
    #[serde(default)]
    pub item_subclasses: Vec<ItemSubclassRef>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_localized_object() {
        let name: LocalizedName =
            serde_json::from_str(r#"{"en_US":"Linen Cloth","ko_KR":"리넨 옷감"}"#).unwrap();
        assert_eq!(name.resolve("ko_KR"), Some("리넨 옷감"));
        assert_eq!(name.resolve("de_DE"), None);
        assert_eq!(name.resolve_or_unknown("de_DE"), UNKNOWN_ITEM_NAME);
    }

    #[test]
    fn test_resolve_plain_string() {
        let name: LocalizedName = serde_json::from_str(r#""Linen Cloth""#).unwrap();
        assert_eq!(name.resolve("ko_KR"), Some("Linen Cloth"));
    }

    #[test]
    fn test_resolve_null_locale_entry() {
        let name: LocalizedName = serde_json::from_str(r#"{"ko_KR":null}"#).unwrap();
        assert_eq!(name.resolve("ko_KR"), None);
    }

    #[test]
    fn test_record_from_localized_raw() {
        let raw = json!({
            "id": 2589,
            "name": {"en_US": "Linen Cloth", "ko_KR": "리넨 옷감"},
            "item_class": {"id": 7, "name": {"en_US": "Tradeskill"}}
        });
        let record = ItemRecord::from_raw(2589, &raw, "ko_KR", RecordSource::Network);
        assert_eq!(record.name, "리넨 옷감");
        assert_eq!(record.classid, Some(7));
        assert!(record.is_resolved());
    }

    #[test]
    fn test_record_from_string_name() {
        let raw = json!({"id": 19019, "name": "Thunderfury", "item_class": {"id": 2}});
        let record = ItemRecord::from_raw(19019, &raw, "en_US", RecordSource::Cache);
        assert_eq!(record.name, "Thunderfury");
        assert_eq!(record.classid, Some(2));
    }

    #[test]
    fn test_record_missing_fields() {
        let record = ItemRecord::from_raw(1, &json!({}), "en_US", RecordSource::Network);
        assert_eq!(record.name, UNKNOWN_ITEM_NAME);
        assert_eq!(record.classid, None);
    }

    #[test]
    fn test_unresolved_serializes_caller_shape() {
        let json = serde_json::to_value(ItemRecord::unresolved(42)).unwrap();
        assert_eq!(json, json!({"id": 42, "name": "Unknown", "classid": null}));
    }

    #[test]
    fn test_class_index_summaries() {
        let index: ItemClassIndex = serde_json::from_value(json!({
            "item_classes": [
                {"id": 0, "name": {"ko_KR": "소비용품", "en_US": "Consumable"}},
                {"id": 2, "name": "Weapon"}
            ]
        }))
        .unwrap();
        let summaries = index.summaries("ko_KR");
        assert_eq!(summaries[0].name, "소비용품");
        assert_eq!(summaries[1].name, "Weapon");
    }
}

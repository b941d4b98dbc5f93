//! Serde tests for core types.
//!
//! These tests pin the JSON shapes shared with callers and with the
//! Game Data API.

use serde_json::json;

use crate::{
    AuctionsResponse, ItemClass, ItemRecord, LocalizedName, Money, RecordSource, Region,
    TimeLeft,
};

// ============================================================================
// Caller-facing Shapes
// ============================================================================

#[test]
fn test_item_record_omits_source() {
    let record = ItemRecord {
        id: 2589,
        name: "Linen Cloth".to_string(),
        classid: Some(7),
        source: RecordSource::Cache,
    };
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value, json!({"id": 2589, "name": "Linen Cloth", "classid": 7}));
}

#[test]
fn test_auction_serialization_skips_absent_prices() {
    let listing: AuctionsResponse = serde_json::from_value(json!({
        "_links": {"self": {"href": "x"}},
        "connected_realm": {"href": "y"},
        "auctions": [{"id": 9, "item": {"id": 2589}, "bid": 500, "quantity": 1, "time_left": "SHORT"}]
    }))
    .unwrap();

    let value = serde_json::to_value(&listing).unwrap();
    let auction = &value["auctions"][0];
    assert_eq!(auction["bid"], json!(500));
    assert!(auction.get("buyout").is_none());
    assert!(auction.get("unit_price").is_none());
    assert_eq!(auction["time_left"], json!("SHORT"));
}

// ============================================================================
// Enum Spellings
// ============================================================================

#[test]
fn test_time_left_spellings() {
    let cases = [
        ("\"SHORT\"", TimeLeft::Short),
        ("\"MEDIUM\"", TimeLeft::Medium),
        ("\"LONG\"", TimeLeft::Long),
        ("\"VERY_LONG\"", TimeLeft::VeryLong),
    ];

    for (json, expected) in cases {
        let parsed: TimeLeft = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, expected, "Failed for {json}");
    }
}

#[test]
fn test_time_left_rejects_unknown() {
    let result: Result<TimeLeft, _> = serde_json::from_str("\"FOREVER\"");
    assert!(result.is_err());
}

#[test]
fn test_region_rejects_unknown() {
    let result: Result<Region, _> = serde_json::from_str("\"mars\"");
    assert!(result.is_err());
}

// ============================================================================
// Localized Names
// ============================================================================

#[test]
fn test_localized_name_serializes_back_unchanged() {
    let original = json!({"en_US": "Weapon", "ko_KR": "무기"});
    let name: LocalizedName = serde_json::from_value(original.clone()).unwrap();
    assert_eq!(serde_json::to_value(&name).unwrap(), original);
}

#[test]
fn test_item_class_with_subclasses() {
    let class: ItemClass = serde_json::from_value(json!({
        "class_id": 2,
        "name": "Weapon",
        "item_subclasses": [
            {"id": 0, "name": "One-Handed Axes"},
            {"id": 1, "name": {"ko_KR": "양손 도끼"}}
        ]
    }))
    .unwrap();

    assert_eq!(class.class_id, 2);
    assert_eq!(class.item_subclasses.len(), 2);
    assert_eq!(class.item_subclasses[1].name.resolve("ko_KR"), Some("양손 도끼"));
}

#[test]
fn test_money_orders_by_copper() {
    let mut prices = vec![Money(300), Money(10_000), Money(5)];
    prices.sort();
    assert_eq!(prices, vec![Money(5), Money(300), Money(10_000)]);
}

//! CLI output formatting tests.
//!
//! Covers both text and JSON modes for tokens, auctions and item records.

#[cfg(test)]
mod text_formatter_tests {
    use super::super::text::{truncate, TextFormatter};
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use wowah_core::{AccessToken, Auction, ConnectedRealm, ItemRecord, ItemSearchPage, Money};

    fn auction(item: u64, quantity: u32, buyout: u64) -> Auction {
        serde_json::from_value(json!({
            "id": 1,
            "item": {"id": item},
            "quantity": quantity,
            "buyout": buyout,
            "time_left": "SHORT"
        }))
        .unwrap()
    }

    #[test]
    fn test_token_masked_by_default() {
        let formatter = TextFormatter::new(false);
        let token = AccessToken::new(
            "abcdefghijkl",
            Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        );

        let masked = formatter.format_token(&token, false);
        assert!(masked.contains("abcd…"));
        assert!(!masked.contains("abcdefghijkl"));

        let revealed = formatter.format_token(&token, true);
        assert!(revealed.contains("abcdefghijkl"));
    }

    #[test]
    fn test_realm_ids_wrap_in_rows() {
        let formatter = TextFormatter::new(false);
        let ids: Vec<u32> = (1..=12).collect();
        let output = formatter.format_realm_ids(&ids);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "12 connected realms");
        assert_eq!(lines.len(), 3);
        assert!(lines[2].contains("12"));
    }

    #[test]
    fn test_realm_detail() {
        let formatter = TextFormatter::new(false);
        let realm: ConnectedRealm = serde_json::from_value(json!({
            "id": 205,
            "has_queue": false,
            "status": {"type": "UP"},
            "population": {"type": "FULL"},
            "realms": [
                {"id": 205, "name": {"ko_KR": "아즈샤라", "en_US": "Azshara"}},
                {"id": 210, "name": "Durotan"}
            ]
        }))
        .unwrap();

        let output = formatter.format_realm(&realm, "ko_KR");
        assert!(output.contains("Connected realm 205"));
        assert!(output.contains("UP"));
        assert!(output.contains("아즈샤라, Durotan"));
        assert!(!output.contains("Queue"));
    }

    #[test]
    fn test_auction_line_with_and_without_name() {
        let formatter = TextFormatter::new(false);
        let listing = auction(2589, 20, 2_000);

        let named = formatter.format_auction_line(&listing, Some("리넨 옷감"));
        assert!(named.contains("2589"));
        assert!(named.contains("리넨 옷감"));
        assert!(named.contains("1s"));
        assert!(named.contains("20s"));
        assert!(named.contains("<30m"));

        let unnamed = formatter.format_auction_line(&listing, None);
        assert!(unnamed.contains(" - "));
    }

    #[test]
    fn test_auction_header_aligns_with_rows() {
        let formatter = TextFormatter::new(false);
        let header = formatter.format_auctions_header();
        let row = formatter.format_auction_line(&auction(1, 1, 1), Some("x"));
        assert_eq!(header.chars().count(), row.chars().count());
    }

    #[test]
    fn test_unresolved_records_are_red() {
        let formatter = TextFormatter::new(true);
        let records = vec![
            ItemRecord::unresolved(42),
            ItemRecord::from_raw(
                2589,
                &json!({"name": "Linen Cloth", "item_class": {"id": 7}}),
                "en_US",
                wowah_core::RecordSource::Network,
            ),
        ];

        let output = formatter.format_records(&records);
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].contains("\x1b[31mUnknown"));
        assert!(lines[1].contains("Linen Cloth"));
        assert!(!lines[1].contains("\x1b[31m"));
    }

    #[test]
    fn test_empty_search_page() {
        let formatter = TextFormatter::new(false);
        let page = ItemSearchPage {
            page: 1,
            page_count: 0,
            items: Vec::new(),
        };
        let output = formatter.format_search_page(&page);
        assert!(output.contains("No items found"));
        assert!(output.contains("Page 1 of 0"));
    }

    #[test]
    fn test_money_without_colors() {
        let formatter = TextFormatter::new(false);
        assert_eq!(formatter.format_money(Money::from_copper(10_203)), "1g 2s 3c");
        assert_eq!(formatter.format_money(Money::from_copper(0)), "0c");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
        assert_eq!(truncate("리넨 옷감 묶음", 4), "리넨 …");
    }
}

#[cfg(test)]
mod json_formatter_tests {
    use super::super::json::{auction_output, JsonFormatter};
    use chrono::{TimeZone, Utc};
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use wowah_core::{AccessToken, Auction, ItemRecord, RecordSource};

    #[test]
    fn test_compact_and_pretty() {
        let data = json!({"a": 1});
        assert_eq!(JsonFormatter::new(false).format(&data).unwrap(), r#"{"a":1}"#);
        assert!(JsonFormatter::new(true).format(&data).unwrap().contains('\n'));
    }

    #[test]
    fn test_token_output() {
        let token = AccessToken::new("abcdefgh", Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap());
        let output: Value =
            serde_json::from_str(&JsonFormatter::new(false).format_token(&token, false).unwrap())
                .unwrap();

        assert_eq!(output["token"], "abcd…");
        assert_eq!(output["expiresAt"], "2026-01-01T00:00:00Z");
    }

    #[test]
    fn test_auction_joined_with_item() {
        let auction: Auction = serde_json::from_value(json!({
            "id": 99,
            "item": {"id": 2589},
            "quantity": 4,
            "unit_price": 250,
            "time_left": "VERY_LONG"
        }))
        .unwrap();
        let record = ItemRecord::from_raw(
            2589,
            &json!({"name": {"ko_KR": "리넨 옷감"}, "item_class": {"id": 7}}),
            "ko_KR",
            RecordSource::Cache,
        );

        let joined = serde_json::to_value(auction_output(&auction, Some(&record))).unwrap();
        assert_eq!(joined["itemId"], 2589);
        assert_eq!(joined["itemName"], "리넨 옷감");
        assert_eq!(joined["itemClassId"], 7);
        assert_eq!(joined["unitPrice"], 250);
        assert_eq!(joined["timeLeft"], "VERY_LONG");
        assert!(joined.get("buyout").is_none());

        let bare = serde_json::to_value(auction_output(&auction, None)).unwrap();
        assert!(bare.get("itemName").is_none());
    }

    #[test]
    fn test_format_auctions_keeps_order() {
        let auctions: Vec<Auction> = [3_u64, 1, 2]
            .iter()
            .map(|id| {
                serde_json::from_value(json!({"id": id, "item": {"id": id}, "time_left": "LONG"}))
                    .unwrap()
            })
            .collect();

        let output = JsonFormatter::new(false)
            .format_auctions(&auctions, &HashMap::new())
            .unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&output).unwrap();
        let ids: Vec<u64> = parsed.iter().map(|a| a["id"].as_u64().unwrap()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}

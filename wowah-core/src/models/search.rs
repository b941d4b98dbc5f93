//! Item search types.

use serde::{Deserialize, Serialize};

use super::item::LocalizedName;

/// `{ "id": .. }` reference.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IdRef {
    /// Referenced id.
    pub id: u32,
}

/// Document data of an item search hit.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchItemData {
    /// Item id.
    pub id: u64,
    /// Item name (search always returns every locale).
    pub name: LocalizedName,
    /// Item class.
    #[serde(default)]
    pub item_class: Option<IdRef>,
}

/// One search hit.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResult {
    /// Document payload.
    pub data: SearchItemData,
}

/// Response of `/search/item`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ItemSearchResponse {
    /// Current page (1-based).
    #[serde(default)]
    pub page: u32,
    /// Hits on this page.
    #[serde(rename = "pageSize", default)]
    pub page_size: u32,
    /// Largest allowed page size.
    #[serde(rename = "maxPageSize", default)]
    pub max_page_size: u32,
    /// Number of pages.
    #[serde(rename = "pageCount", default)]
    pub page_count: u32,
    /// Hits.
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

/// Search hit flattened to one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemSearchHit {
    /// Item id.
    pub id: u64,
    /// Item name.
    pub name: String,
    /// Item class id.
    pub classid: Option<u32>,
}

/// A page of flattened search hits.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSearchPage {
    /// Current page (1-based).
    pub page: u32,
    /// Number of pages.
    pub page_count: u32,
    /// Hits on this page.
    pub items: Vec<ItemSearchHit>,
}

impl ItemSearchResponse {
    /// Flattens hits to `locale`.
    pub fn to_page(&self, locale: &str) -> ItemSearchPage {
        ItemSearchPage {
            page: self.page,
            page_count: self.page_count,
            items: self
                .results
                .iter()
                .map(|hit| ItemSearchHit {
                    id: hit.data.id,
                    name: hit.data.name.resolve_or_unknown(locale),
                    classid: hit.data.item_class.as_ref().map(|c| c.id),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_page() {
        let response: ItemSearchResponse = serde_json::from_value(json!({
            "page": 1,
            "pageSize": 2,
            "maxPageSize": 100,
            "pageCount": 3,
            "results": [
                {"key": {"href": "x"}, "data": {"id": 2589, "name": {"ko_KR": "리넨 옷감"}, "item_class": {"id": 7}}},
                {"data": {"id": 2592, "name": {"en_US": "Wool Cloth"}}}
            ]
        }))
        .unwrap();

        let page = response.to_page("ko_KR");
        assert_eq!(page.page_count, 3);
        assert_eq!(page.items[0].name, "리넨 옷감");
        assert_eq!(page.items[0].classid, Some(7));
        assert_eq!(page.items[1].name, "Unknown");
        assert_eq!(page.items[1].classid, None);
    }
}

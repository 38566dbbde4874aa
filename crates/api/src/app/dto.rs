use serde::Deserialize;

use gildedrose_inventory::Item;

// -------------------------
// Request DTOs
// -------------------------

/// Fields are optional so a missing one maps to a 400 with a clear message
/// instead of a generic extractor rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    pub name: Option<String>,
    pub sell_in: Option<i32>,
    pub quality: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadFileRequest {
    pub file_path: Option<String>,
}

// -------------------------
// Response mapping
// -------------------------

pub fn item_to_json(item: &Item) -> serde_json::Value {
    serde_json::json!({
        "name": item.name(),
        "sellIn": item.sell_in(),
        "quality": item.quality(),
        "category": item.category(),
        "type": item.kind().display_name(),
        "isExpired": item.is_expired(),
        "isLegendary": item.is_legendary(),
    })
}

pub fn items_to_json(items: &[Item]) -> serde_json::Value {
    serde_json::json!({
        "count": items.len(),
        "items": items.iter().map(item_to_json).collect::<Vec<_>>(),
    })
}

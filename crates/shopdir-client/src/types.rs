//! Raw shop records as returned by the shop API.
//!
//! ## Observed shape
//!
//! ```json
//! { "data": { "shopList": [ { "id": 12, "area_name": "America-Eastern",
//!   "subarea": "New York", "name": "Shop A ", "address": "...",
//!   "map_url": "https://maps...", "telephone_number": "555-0100" } ] } }
//! ```
//!
//! No field is guaranteed. Records are read from [`serde_json::Value`] rather
//! than a derived struct so that a single malformed field degrades to "absent"
//! instead of rejecting the whole payload.

use serde_json::Value;

/// One record from `data.shopList`, every field optional.
///
/// Empty strings are kept here; normalization decides what counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawShopRecord {
    pub id: Option<i64>,
    pub area_name: Option<String>,
    pub subarea: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub map_url: Option<String>,
    pub telephone_number: Option<String>,
}

impl RawShopRecord {
    /// Reads a record from an arbitrary JSON value. Non-object values yield a
    /// record with every field absent.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        Self {
            id: value.get("id").and_then(lenient_id),
            area_name: value.get("area_name").and_then(lenient_string),
            subarea: value.get("subarea").and_then(lenient_string),
            name: value.get("name").and_then(lenient_string),
            address: value.get("address").and_then(lenient_string),
            map_url: value.get("map_url").and_then(lenient_string),
            telephone_number: value.get("telephone_number").and_then(lenient_string),
        }
    }
}

/// Extracts `data.shopList`. A missing path or a non-array value is an empty
/// list, not an error.
#[must_use]
pub fn extract_shop_list(payload: &Value) -> Vec<RawShopRecord> {
    payload
        .pointer("/data/shopList")
        .and_then(Value::as_array)
        .map(|list| list.iter().map(RawShopRecord::from_value).collect())
        .unwrap_or_default()
}

fn lenient_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn lenient_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

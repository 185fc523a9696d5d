//! Normalization from [`RawShopRecord`] to [`shopdir_core::Shop`].
//!
//! Never fails: every raw record yields exactly one shop, with documented
//! defaults standing in for absent fields.

use shopdir_core::shop::{ADDRESS_NOT_PROVIDED, UNKNOWN_REGION, UNKNOWN_STATE, UNNAMED_SHOP};
use shopdir_core::{Shop, ShopCollection};

use crate::types::RawShopRecord;

/// Normalizes one raw record.
#[must_use]
pub fn normalize_shop(raw: RawShopRecord) -> Shop {
    // A whitespace-only name trims to nothing and takes the default.
    let name = raw
        .name
        .map(|n| n.trim().to_owned())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| UNNAMED_SHOP.to_owned());

    Shop {
        id: raw.id,
        region: non_empty_or(raw.area_name, UNKNOWN_REGION),
        state: non_empty_or(raw.subarea, UNKNOWN_STATE),
        name,
        address: non_empty_or(raw.address, ADDRESS_NOT_PROVIDED),
        map_url: non_empty_or(raw.map_url, ""),
        phone: non_empty_or(raw.telephone_number, ""),
    }
}

/// Normalizes a full list into a fresh collection, preserving order.
#[must_use]
pub fn normalize_shops(raw: Vec<RawShopRecord>) -> ShopCollection {
    raw.into_iter().map(normalize_shop).collect()
}

fn non_empty_or(value: Option<String>, default: &str) -> String {
    value
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_owned())
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;

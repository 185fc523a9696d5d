//! Normalized shop entities and the immutable collection that holds them.

use std::sync::{Arc, LazyLock};

use regex::Regex;
use serde::Serialize;

/// Default values substituted during normalization when a raw field is absent.
pub const UNKNOWN_REGION: &str = "Unknown region";
pub const UNKNOWN_STATE: &str = "Unknown state";
pub const UNNAMED_SHOP: &str = "Unnamed shop";
pub const ADDRESS_NOT_PROVIDED: &str = "Address not provided";

static NON_DIAL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\d+]").expect("valid regex"));

/// One retail location after normalization.
///
/// `region`, `state`, `name` and `address` are always non-empty. `map_url`
/// and `phone` are empty when the source did not provide them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    /// Source-assigned identifier. Higher values are more recent.
    pub id: Option<i64>,
    pub region: String,
    pub state: String,
    pub name: String,
    pub address: String,
    pub map_url: String,
    pub phone: String,
}

impl Shop {
    #[must_use]
    pub fn has_phone(&self) -> bool {
        !self.phone.is_empty()
    }

    #[must_use]
    pub fn has_map_url(&self) -> bool {
        !self.map_url.is_empty()
    }

    /// Dialable `tel:` URI for the phone number, keeping only digits and `+`.
    ///
    /// Returns `None` when the shop has no phone number.
    #[must_use]
    pub fn tel_uri(&self) -> Option<String> {
        if !self.has_phone() {
            return None;
        }
        Some(format!("tel:{}", NON_DIAL_CHARS.replace_all(&self.phone, "")))
    }

    /// Lower-cased `"name state address"` text matched by the free-text filter.
    #[must_use]
    pub fn search_blob(&self) -> String {
        format!("{} {} {}", self.name, self.state, self.address).to_lowercase()
    }
}

/// The full set of loaded shops.
///
/// Cloning is cheap and shares the underlying slice. A reload builds a new
/// collection and swaps it in; an existing collection is never mutated.
#[derive(Debug, Clone, Default)]
pub struct ShopCollection {
    shops: Arc<[Shop]>,
}

impl ShopCollection {
    #[must_use]
    pub fn new(shops: Vec<Shop>) -> Self {
        Self {
            shops: shops.into(),
        }
    }

    #[must_use]
    pub fn shops(&self) -> &[Shop] {
        &self.shops
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shops.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shops.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shop> {
        self.shops.iter()
    }
}

impl FromIterator<Shop> for ShopCollection {
    fn from_iter<I: IntoIterator<Item = Shop>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ShopCollection {
    type Item = &'a Shop;
    type IntoIter = std::slice::Iter<'a, Shop>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

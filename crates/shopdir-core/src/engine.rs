//! Filter, sort and aggregate pass over a [`ShopCollection`].
//!
//! Every call recomputes its output from scratch; nothing is cached between
//! calls and the input collection is never modified.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use crate::collate::locale_cmp;
use crate::criteria::{SortKey, ViewCriteria};
use crate::shop::{Shop, ShopCollection};

/// Result of one engine run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilteredView {
    pub shops: Vec<Shop>,
    pub summary: RegionSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionCount {
    pub region: String,
    pub count: usize,
}

/// Per-region tallies over a filtered result, ordered by region name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RegionSummary {
    pub total: usize,
    pub regions: Vec<RegionCount>,
}

/// Applies `criteria` to `collection`: region, state and text filters (AND),
/// then the selected sort, then region tallies.
#[must_use]
pub fn run_view(collection: &ShopCollection, criteria: &ViewCriteria) -> FilteredView {
    let mut shops = filter_shops(collection, criteria);
    sort_shops(&mut shops, criteria.sort);
    let summary = summarize_regions(&shops);
    FilteredView { shops, summary }
}

/// Returns copies of the shops that satisfy every active filter, in
/// collection order.
#[must_use]
pub fn filter_shops(collection: &ShopCollection, criteria: &ViewCriteria) -> Vec<Shop> {
    let query = criteria.normalized_query();

    collection
        .iter()
        .filter(|shop| criteria.region.matches(&shop.region))
        .filter(|shop| criteria.state.matches(&shop.state))
        .filter(|shop| {
            query
                .as_deref()
                .is_none_or(|q| shop.search_blob().contains(q))
        })
        .cloned()
        .collect()
}

/// Stable sort by `key`. Shops without an id sort last under
/// [`SortKey::Recent`].
pub fn sort_shops(shops: &mut [Shop], key: SortKey) {
    shops.sort_by(|a, b| compare_shops(a, b, key));
}

fn compare_shops(a: &Shop, b: &Shop, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => locale_cmp(&a.name, &b.name),
        SortKey::State => {
            locale_cmp(&a.state, &b.state).then_with(|| locale_cmp(&a.name, &b.name))
        }
        SortKey::Region => {
            locale_cmp(&a.region, &b.region).then_with(|| locale_cmp(&a.name, &b.name))
        }
        // Option orders None below Some, so reversing puts missing ids last.
        SortKey::Recent => b.id.cmp(&a.id),
    }
}

#[must_use]
pub fn summarize_regions(shops: &[Shop]) -> RegionSummary {
    let mut tallies: HashMap<&str, usize> = HashMap::new();
    for shop in shops {
        *tallies.entry(shop.region.as_str()).or_default() += 1;
    }

    let mut regions: Vec<RegionCount> = tallies
        .into_iter()
        .map(|(region, count)| RegionCount {
            region: region.to_owned(),
            count,
        })
        .collect();
    regions.sort_by(|a, b| locale_cmp(&a.region, &b.region));

    RegionSummary {
        total: shops.len(),
        regions,
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;

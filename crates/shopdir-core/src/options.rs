//! Selectable region and state options derived from a full collection.

use serde::Serialize;

use crate::collate::locale_cmp;
use crate::criteria::FilterChoice;
use crate::shop::{Shop, ShopCollection};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub value: FilterChoice,
    pub label: String,
}

/// Region and state options, each led by its "all" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub regions: Vec<FilterOption>,
    pub states: Vec<FilterOption>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        derive_filter_options(&ShopCollection::default())
    }
}

/// Collects the distinct regions and states of `collection`, sorted
/// locale-aware. Computed from the full collection, never a filtered subset.
#[must_use]
pub fn derive_filter_options(collection: &ShopCollection) -> FilterOptions {
    FilterOptions {
        regions: options_for(collection, "All regions", |shop| &shop.region),
        states: options_for(collection, "All states", |shop| &shop.state),
    }
}

fn options_for<'a, F>(
    collection: &'a ShopCollection,
    all_label: &str,
    field: F,
) -> Vec<FilterOption>
where
    F: Fn(&'a Shop) -> &'a String,
{
    let mut values: Vec<&str> = collection.iter().map(|shop| field(shop).as_str()).collect();
    values.sort_by(|a, b| locale_cmp(a, b));
    values.dedup();

    std::iter::once(FilterOption {
        value: FilterChoice::All,
        label: all_label.to_owned(),
    })
    .chain(values.into_iter().map(|value| FilterOption {
        value: FilterChoice::Only(value.to_owned()),
        label: value.to_owned(),
    }))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_shop(region: &str, state: &str) -> Shop {
        Shop {
            id: None,
            region: region.to_owned(),
            state: state.to_owned(),
            name: "Shop".to_owned(),
            address: "Somewhere".to_owned(),
            map_url: String::new(),
            phone: String::new(),
        }
    }

    fn values(options: &[FilterOption]) -> Vec<&str> {
        options.iter().map(|o| o.value.as_value()).collect()
    }

    #[test]
    fn empty_collection_has_only_sentinels() {
        let options = derive_filter_options(&ShopCollection::default());
        assert_eq!(options.regions.len(), 1);
        assert_eq!(options.regions[0].value, FilterChoice::All);
        assert_eq!(options.regions[0].label, "All regions");
        assert_eq!(options.states[0].label, "All states");
    }

    #[test]
    fn values_are_distinct_and_sorted() {
        let collection = ShopCollection::new(vec![
            make_shop("America-Western", "Oregon"),
            make_shop("America-Eastern", "New York"),
            make_shop("America-Western", "California"),
            make_shop("America-Eastern", "New York"),
        ]);
        let options = derive_filter_options(&collection);
        assert_eq!(
            values(&options.regions),
            vec!["all", "America-Eastern", "America-Western"]
        );
        assert_eq!(
            values(&options.states),
            vec!["all", "California", "New York", "Oregon"]
        );
    }

    #[test]
    fn sentinel_is_distinct_from_real_value_named_all() {
        let collection = ShopCollection::new(vec![make_shop("all", "all")]);
        let options = derive_filter_options(&collection);
        assert_eq!(options.regions.len(), 2);
        assert_eq!(options.regions[0].value, FilterChoice::All);
        assert_eq!(
            options.regions[1].value,
            FilterChoice::Only("all".to_owned())
        );
    }

    #[test]
    fn serializes_choice_as_plain_value() {
        let collection = ShopCollection::new(vec![make_shop("America-Eastern", "Ohio")]);
        let json = serde_json::to_value(derive_filter_options(&collection)).unwrap();
        assert_eq!(json["regions"][0]["value"], "all");
        assert_eq!(json["regions"][1]["value"], "America-Eastern");
        assert_eq!(json["states"][1]["label"], "Ohio");
    }
}

use super::*;

// -----------------------------------------------------------------------
// normalize_shop
// -----------------------------------------------------------------------

fn full_record() -> RawShopRecord {
    RawShopRecord {
        id: Some(101),
        area_name: Some("America-Eastern".to_owned()),
        subarea: Some("New York".to_owned()),
        name: Some("  Hero Cards  ".to_owned()),
        address: Some("12 Broadway, New York, NY".to_owned()),
        map_url: Some("https://maps.example.com/hero".to_owned()),
        telephone_number: Some("(212) 555-0199".to_owned()),
    }
}

#[test]
fn normalize_shop_copies_fields_and_trims_name() {
    let shop = normalize_shop(full_record());
    assert_eq!(shop.id, Some(101));
    assert_eq!(shop.region, "America-Eastern");
    assert_eq!(shop.state, "New York");
    assert_eq!(shop.name, "Hero Cards");
    assert_eq!(shop.address, "12 Broadway, New York, NY");
    assert_eq!(shop.map_url, "https://maps.example.com/hero");
    assert_eq!(shop.phone, "(212) 555-0199");
}

#[test]
fn normalize_shop_defaults_every_missing_field() {
    let shop = normalize_shop(RawShopRecord::default());
    assert_eq!(shop.id, None);
    assert_eq!(shop.region, "Unknown region");
    assert_eq!(shop.state, "Unknown state");
    assert_eq!(shop.name, "Unnamed shop");
    assert_eq!(shop.address, "Address not provided");
    assert!(shop.map_url.is_empty());
    assert!(shop.phone.is_empty());
}

#[test]
fn missing_region_affects_only_region() {
    let mut raw = full_record();
    raw.area_name = None;
    let shop = normalize_shop(raw);
    let expected = normalize_shop(full_record());
    assert_eq!(shop.region, "Unknown region");
    assert_eq!(shop.state, expected.state);
    assert_eq!(shop.name, expected.name);
    assert_eq!(shop.address, expected.address);
    assert_eq!(shop.map_url, expected.map_url);
    assert_eq!(shop.phone, expected.phone);
}

#[test]
fn missing_state_affects_only_state() {
    let mut raw = full_record();
    raw.subarea = None;
    let shop = normalize_shop(raw);
    assert_eq!(shop.state, "Unknown state");
    assert_eq!(shop.region, "America-Eastern");
}

#[test]
fn missing_address_defaults() {
    let mut raw = full_record();
    raw.address = Some(String::new());
    assert_eq!(normalize_shop(raw).address, "Address not provided");
}

#[test]
fn missing_map_url_and_phone_are_empty() {
    let mut raw = full_record();
    raw.map_url = None;
    raw.telephone_number = Some(String::new());
    let shop = normalize_shop(raw);
    assert!(!shop.has_map_url());
    assert!(!shop.has_phone());
    assert_eq!(shop.name, "Hero Cards");
}

#[test]
fn empty_strings_count_as_absent() {
    let raw = RawShopRecord {
        area_name: Some(String::new()),
        subarea: Some(String::new()),
        name: Some(String::new()),
        ..RawShopRecord::default()
    };
    let shop = normalize_shop(raw);
    assert_eq!(shop.region, "Unknown region");
    assert_eq!(shop.state, "Unknown state");
    assert_eq!(shop.name, "Unnamed shop");
}

#[test]
fn whitespace_only_name_takes_default() {
    let mut raw = full_record();
    raw.name = Some("   ".to_owned());
    assert_eq!(normalize_shop(raw).name, "Unnamed shop");
}

// -----------------------------------------------------------------------
// normalize_shops
// -----------------------------------------------------------------------

#[test]
fn normalize_shops_preserves_count_and_order() {
    let mut second = full_record();
    second.id = Some(7);
    second.name = Some("Second".to_owned());
    let collection = normalize_shops(vec![full_record(), RawShopRecord::default(), second]);
    assert_eq!(collection.len(), 3);
    let ids: Vec<Option<i64>> = collection.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![Some(101), None, Some(7)]);
}

#[test]
fn normalize_shops_empty_input() {
    assert!(normalize_shops(Vec::new()).is_empty());
}

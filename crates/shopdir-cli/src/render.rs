//! Plain-text rendering of engine output for the terminal.

use shopdir_core::{FilterOptions, MapPin, RegionSummary, Shop};

pub(crate) const LOAD_FAILED_MESSAGE: &str = "Could not load shops. Please refresh.";
pub(crate) const EMPTY_LIST_MESSAGE: &str = "No shops match your filters yet.";

pub(crate) fn render_status(count: usize) -> String {
    format!("{count} shops shown")
}

pub(crate) fn render_shop_card(shop: &Shop) -> String {
    let phone = match shop.tel_uri() {
        Some(tel) => format!("{} <{tel}>", shop.phone),
        None => "Phone unavailable".to_owned(),
    };
    let map = if shop.has_map_url() {
        shop.map_url.as_str()
    } else {
        "Map unavailable"
    };

    format!(
        "{region}\n  {name} [{state}]\n  {address}\n  {phone}\n  {map}\n",
        region = shop.region,
        name = shop.name,
        state = shop.state,
        address = shop.address,
    )
}

pub(crate) fn render_list(shops: &[Shop]) -> String {
    if shops.is_empty() {
        return format!("{EMPTY_LIST_MESSAGE}\n");
    }
    shops
        .iter()
        .map(render_shop_card)
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn render_summary(summary: &RegionSummary) -> String {
    let mut out = format!("{:>5}  shops shown\n", summary.total);
    for region in &summary.regions {
        out.push_str(&format!("{:>5}  {}\n", region.count, region.region));
    }
    out
}

pub(crate) fn render_options(options: &FilterOptions) -> String {
    let mut out = String::from("Regions:\n");
    for option in &options.regions {
        out.push_str(&format!("  {}\n", option.label));
    }
    out.push_str("States:\n");
    for option in &options.states {
        out.push_str(&format!("  {}\n", option.label));
    }
    out
}

pub(crate) fn render_pins(pins: &[MapPin]) -> String {
    pins.iter()
        .map(|pin| {
            format!(
                "{:>9.4} {:>10.4}  {} ({}, via {:?})\n",
                pin.coordinate.lat,
                pin.coordinate.lng,
                pin.name,
                pin.state,
                pin.coordinate_source
            )
        })
        .collect()
}

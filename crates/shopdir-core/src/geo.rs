//! Approximate map coordinates for shops.
//!
//! Shops carry no coordinates of their own, so a pin is placed at the
//! centroid of the shop's state, else the centre of its region, else the
//! geographic centre of the contiguous US. Unmapped names fall through to the
//! next table rather than failing.

use serde::Serialize;

use crate::shop::Shop;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// Which lookup table produced a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateSource {
    State,
    Region,
    Default,
}

/// A shop placed on the map overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPin {
    pub id: Option<i64>,
    pub name: String,
    pub region: String,
    pub state: String,
    pub coordinate: Coordinate,
    pub coordinate_source: CoordinateSource,
}

/// Kansas, near Lebanon.
pub const DEFAULT_CENTER: Coordinate = Coordinate {
    lat: 39.828_3,
    lng: -98.579_5,
};

const fn at(lat: f64, lng: f64) -> Coordinate {
    Coordinate { lat, lng }
}

/// State centroids keyed by full state name as reported by the shop API.
pub const STATE_COORDINATES: &[(&str, Coordinate)] = &[
    ("Alabama", at(32.806_7, -86.791_1)),
    ("Alaska", at(61.370_7, -152.404_4)),
    ("Arizona", at(33.729_8, -111.431_2)),
    ("Arkansas", at(34.969_7, -92.373_1)),
    ("California", at(36.116_2, -119.681_6)),
    ("Colorado", at(39.059_8, -105.311_1)),
    ("Connecticut", at(41.597_8, -72.755_4)),
    ("Delaware", at(39.318_5, -75.507_1)),
    ("District of Columbia", at(38.897_4, -77.026_8)),
    ("Florida", at(27.766_3, -81.686_8)),
    ("Georgia", at(33.040_6, -83.643_1)),
    ("Hawaii", at(21.094_3, -157.498_3)),
    ("Idaho", at(44.240_5, -114.478_8)),
    ("Illinois", at(40.349_5, -88.986_1)),
    ("Indiana", at(39.849_4, -86.258_3)),
    ("Iowa", at(42.011_5, -93.210_5)),
    ("Kansas", at(38.526_6, -96.726_5)),
    ("Kentucky", at(37.668_1, -84.670_1)),
    ("Louisiana", at(31.169_5, -91.867_8)),
    ("Maine", at(44.693_9, -69.381_9)),
    ("Maryland", at(39.063_9, -76.802_1)),
    ("Massachusetts", at(42.230_2, -71.530_1)),
    ("Michigan", at(43.326_6, -84.536_1)),
    ("Minnesota", at(45.694_5, -93.900_2)),
    ("Mississippi", at(32.741_6, -89.678_7)),
    ("Missouri", at(38.456_1, -92.288_4)),
    ("Montana", at(46.921_9, -110.454_4)),
    ("Nebraska", at(41.125_4, -98.268_1)),
    ("Nevada", at(38.313_5, -117.055_4)),
    ("New Hampshire", at(43.452_5, -71.563_9)),
    ("New Jersey", at(40.298_9, -74.521_0)),
    ("New Mexico", at(34.840_5, -106.248_5)),
    ("New York", at(42.165_7, -74.948_1)),
    ("North Carolina", at(35.630_1, -79.806_4)),
    ("North Dakota", at(47.528_9, -99.784_0)),
    ("Ohio", at(40.388_8, -82.764_9)),
    ("Oklahoma", at(35.565_3, -96.928_9)),
    ("Oregon", at(44.572_0, -122.070_9)),
    ("Pennsylvania", at(40.590_8, -77.209_8)),
    ("Rhode Island", at(41.680_9, -71.511_8)),
    ("South Carolina", at(33.856_9, -80.945_0)),
    ("South Dakota", at(44.299_8, -99.438_8)),
    ("Tennessee", at(35.747_8, -86.692_3)),
    ("Texas", at(31.054_5, -97.563_5)),
    ("Utah", at(40.150_0, -111.862_4)),
    ("Vermont", at(44.045_9, -72.710_7)),
    ("Virginia", at(37.769_3, -78.170_0)),
    ("Washington", at(47.400_9, -121.490_5)),
    ("West Virginia", at(38.491_2, -80.954_5)),
    ("Wisconsin", at(44.268_5, -89.616_5)),
    ("Wyoming", at(42.756_0, -107.302_5)),
    ("Puerto Rico", at(18.220_8, -66.590_1)),
];

/// Rough centres of the multi-state regions the API groups shops into.
pub const REGION_COORDINATES: &[(&str, Coordinate)] = &[
    ("America-Eastern", at(38.900_0, -77.000_0)),
    ("America-Central", at(38.500_0, -92.000_0)),
    ("America-Mountain", at(41.000_0, -108.000_0)),
    ("America-Western", at(37.500_0, -120.000_0)),
    ("America-Pacific", at(40.000_0, -121.500_0)),
    ("America-Alaska", at(61.370_7, -152.404_4)),
    ("America-Hawaii", at(21.094_3, -157.498_3)),
];

fn lookup(table: &[(&str, Coordinate)], key: &str) -> Option<Coordinate> {
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, coordinate)| *coordinate)
}

/// Resolves a coordinate for `shop`. Always succeeds.
#[must_use]
pub fn resolve_coordinate(shop: &Shop) -> (Coordinate, CoordinateSource) {
    if let Some(coordinate) = lookup(STATE_COORDINATES, &shop.state) {
        return (coordinate, CoordinateSource::State);
    }
    if let Some(coordinate) = lookup(REGION_COORDINATES, &shop.region) {
        return (coordinate, CoordinateSource::Region);
    }
    (DEFAULT_CENTER, CoordinateSource::Default)
}

#[must_use]
pub fn map_pins(shops: &[Shop]) -> Vec<MapPin> {
    shops
        .iter()
        .map(|shop| {
            let (coordinate, coordinate_source) = resolve_coordinate(shop);
            MapPin {
                id: shop.id,
                name: shop.name.clone(),
                region: shop.region.clone(),
                state: shop.state.clone(),
                coordinate,
                coordinate_source,
            }
        })
        .collect()
}

pub mod app_config;
pub mod collate;
pub mod config;
pub mod criteria;
pub mod engine;
pub mod geo;
pub mod options;
pub mod shop;

pub use app_config::{AppConfig, Environment};
pub use collate::locale_cmp;
pub use config::{load_app_config, load_app_config_from_env};
pub use criteria::{FilterChoice, SortKey, ViewCriteria};
pub use engine::{run_view, FilteredView, RegionCount, RegionSummary};
pub use geo::{map_pins, resolve_coordinate, Coordinate, CoordinateSource, MapPin};
pub use options::{derive_filter_options, FilterOption, FilterOptions};
pub use shop::{Shop, ShopCollection};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

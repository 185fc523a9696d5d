pub mod client;
pub mod directory;
pub mod error;
pub mod normalize;
pub mod source;
pub mod types;

pub use client::{LoadReport, LoadedShops, ShopClient};
pub use directory::{Directory, DirectoryView, ReloadOutcome};
pub use error::{LoadError, SourceError};
pub use normalize::{normalize_shop, normalize_shops};
pub use source::{sources_from_config, ShopSource};
pub use types::{extract_shop_list, RawShopRecord};

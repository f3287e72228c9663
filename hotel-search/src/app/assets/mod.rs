mod asset_decoder;
mod asset_error;
mod asset_source;
mod directory_assets;
mod embedded_assets;

pub use asset_decoder::{decode_records, HotelRecords};
pub use asset_error::AssetError;
pub use asset_source::{AssetSource, GEO_ASSET, HOTELS_ASSET, INVENTORY_ASSET};
pub use directory_assets::DirectoryAssets;
pub use embedded_assets::EmbeddedAssets;

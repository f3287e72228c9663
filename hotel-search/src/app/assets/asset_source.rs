use super::AssetError;
use std::borrow::Cow;

/// hotel locations, a JSON array of [`hotel_search_core::model::geo::GeoPoint`]
pub const GEO_ASSET: &str = "geo.json";
/// hotel profiles, a JSON array of [`hotel_search_core::model::profile::HotelProfile`]
pub const HOTELS_ASSET: &str = "hotels.json";
/// rate plans, a JSON array of [`hotel_search_core::model::rate::RatePlan`]
pub const INVENTORY_ASSET: &str = "inventory.json";

/// provides the raw bytes of a named static asset. only used while the
/// application is being built, where any failure is fatal.
pub trait AssetSource: Send + Sync {
    fn load(&self, name: &str) -> Result<Cow<'_, [u8]>, AssetError>;

    /// where the assets come from, for log messages
    fn location(&self) -> String;
}

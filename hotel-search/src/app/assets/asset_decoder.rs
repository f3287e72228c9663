use super::{AssetError, AssetSource, GEO_ASSET, HOTELS_ASSET, INVENTORY_ASSET};
use hotel_search_core::model::geo::GeoPoint;
use hotel_search_core::model::profile::HotelProfile;
use hotel_search_core::model::rate::RatePlan;
use serde::de::DeserializeOwned;

/// the three record collections read from the static assets.
#[derive(Debug, Clone, Default)]
pub struct HotelRecords {
    pub geo_points: Vec<GeoPoint>,
    pub profiles: Vec<HotelProfile>,
    pub rate_plans: Vec<RatePlan>,
}

impl HotelRecords {
    /// loads and decodes every asset. the first missing or malformed asset
    /// fails the whole load.
    pub fn load(source: &dyn AssetSource) -> Result<HotelRecords, AssetError> {
        log::info!("loading hotel data from {}", source.location());
        let geo_points = decode_records(GEO_ASSET, &source.load(GEO_ASSET)?)?;
        let profiles = decode_records(HOTELS_ASSET, &source.load(HOTELS_ASSET)?)?;
        let rate_plans = decode_records(INVENTORY_ASSET, &source.load(INVENTORY_ASSET)?)?;
        Ok(HotelRecords {
            geo_points,
            profiles,
            rate_plans,
        })
    }
}

/// decodes a JSON array of records.
pub fn decode_records<T: DeserializeOwned>(name: &str, bytes: &[u8]) -> Result<Vec<T>, AssetError> {
    serde_json::from_slice(bytes).map_err(|e| AssetError::DecodeFailure {
        name: name.to_string(),
        message: e.to_string(),
    })
}

use super::{HotelSearchAppConfig, HotelSearchAppError};
use crate::app::assets::{AssetSource, DirectoryAssets, EmbeddedAssets, HotelRecords};
use hotel_search_core::algorithm::search::SearchPipeline;
use hotel_search_core::model::geo::GeoIndex;
use hotel_search_core::model::profile::{HotelProfile, ProfileStore};
use hotel_search_core::model::rate::RateTable;

/// the hotel data a running service reads from. built once before the
/// server accepts connections and never modified afterward, so it is
/// shared between request handlers without locking.
pub struct HotelSearchApp {
    pub geo_index: GeoIndex,
    pub rate_table: RateTable,
    pub profile_store: ProfileStore,
}

impl HotelSearchApp {
    pub fn new(
        geo_index: GeoIndex,
        rate_table: RateTable,
        profile_store: ProfileStore,
    ) -> HotelSearchApp {
        HotelSearchApp {
            geo_index,
            rate_table,
            profile_store,
        }
    }

    /// builds the stores from decoded records.
    pub fn from_records(records: HotelRecords) -> HotelSearchApp {
        let HotelRecords {
            geo_points,
            profiles,
            rate_plans,
        } = records;
        let app = HotelSearchApp::new(
            GeoIndex::from_points(geo_points),
            RateTable::from_rate_plans(rate_plans),
            ProfileStore::from_profiles(profiles),
        );
        log::info!(
            "loaded {} hotel locations, {} rate plans, {} hotel profiles",
            app.geo_index.len(),
            app.rate_table.len(),
            app.profile_store.len()
        );
        app
    }

    pub fn from_asset_source(source: &dyn AssetSource) -> Result<HotelSearchApp, HotelSearchAppError> {
        let records = HotelRecords::load(source)?;
        Ok(HotelSearchApp::from_records(records))
    }

    pub fn search_pipeline(&self) -> SearchPipeline<'_> {
        SearchPipeline::new(&self.geo_index, &self.rate_table, &self.profile_store)
    }

    /// hotels near `center` (x = longitude, y = latitude) with a rate plan
    /// for the stay, nearest first.
    pub fn search(
        &self,
        center: &geo::Point<f64>,
        in_date: &str,
        out_date: &str,
    ) -> Vec<&HotelProfile> {
        self.search_pipeline().search(center, in_date, out_date)
    }
}

impl TryFrom<&HotelSearchAppConfig> for HotelSearchApp {
    type Error = HotelSearchAppError;

    fn try_from(config: &HotelSearchAppConfig) -> Result<Self, Self::Error> {
        match &config.assets.data_dir {
            Some(data_dir) => HotelSearchApp::from_asset_source(&DirectoryAssets::new(data_dir)),
            None => HotelSearchApp::from_asset_source(&EmbeddedAssets),
        }
    }
}

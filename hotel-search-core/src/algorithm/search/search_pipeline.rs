use super::search_ops;
use crate::model::geo::{AcceptAll, GeoIndex};
use crate::model::profile::{HotelProfile, ProfileStore};
use crate::model::rate::RateTable;
use uom::si::f64::Length;
use uom::si::length::kilometer;

/// search radius around the query center, in kilometers
pub const MAX_SEARCH_RADIUS_KM: f64 = 10.0;

/// result cap for the spatial stage. large enough that only the radius
/// limits the candidate set.
pub const MAX_SEARCH_RESULTS: usize = 1_000_000_000;

/// geo search -> rate plan join -> profile join over borrowed, read-only
/// stores.
#[derive(Clone, Copy)]
pub struct SearchPipeline<'a> {
    geo_index: &'a GeoIndex,
    rate_table: &'a RateTable,
    profile_store: &'a ProfileStore,
}

impl<'a> SearchPipeline<'a> {
    pub fn new(
        geo_index: &'a GeoIndex,
        rate_table: &'a RateTable,
        profile_store: &'a ProfileStore,
    ) -> SearchPipeline<'a> {
        SearchPipeline {
            geo_index,
            rate_table,
            profile_store,
        }
    }

    /// hotels near `center` with a rate plan for the stay, nearest first.
    ///
    /// # Arguments
    ///
    /// * `center` - query location, x = longitude, y = latitude
    /// * `in_date` - check-in date, matched verbatim against the inventory
    /// * `out_date` - check-out date, matched verbatim against the inventory
    pub fn search(
        &self,
        center: &geo::Point<f64>,
        in_date: &str,
        out_date: &str,
    ) -> Vec<&'a HotelProfile> {
        let radius = Length::new::<kilometer>(MAX_SEARCH_RADIUS_KM);
        let points = search_ops::nearby_points(
            self.geo_index,
            center,
            MAX_SEARCH_RESULTS,
            radius,
            &AcceptAll,
        );
        let rate_plans =
            search_ops::rate_plans_for_stay(self.rate_table, &points, in_date, out_date);
        let hotels = search_ops::profiles_for_rate_plans(self.profile_store, &rate_plans);
        log::debug!(
            "search at ({}, {}) for [{}, {}]: {} nearby, {} available, {} with profile",
            center.x(),
            center.y(),
            in_date,
            out_date,
            points.len(),
            rate_plans.len(),
            hotels.len()
        );
        hotels
    }
}

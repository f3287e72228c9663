//! the three stages of a hotel search. each stage only narrows its input
//! and never reorders it.
use crate::model::geo::{GeoIndex, NearestPoint, PointPredicate};
use crate::model::profile::{HotelProfile, ProfileStore};
use crate::model::rate::{RatePlan, RateTable, Stay};
use itertools::Itertools;
use uom::si::f64::Length;

/// spatial stage: indexed points around `center`, nearest first.
pub fn nearby_points<'a, P>(
    geo_index: &'a GeoIndex,
    center: &geo::Point<f64>,
    max_results: usize,
    max_radius: Length,
    predicate: &P,
) -> Vec<NearestPoint<'a>>
where
    P: PointPredicate + ?Sized,
{
    geo_index.nearest(center, max_results, max_radius, predicate)
}

/// availability stage: keeps the candidates with a rate plan for the stay.
pub fn rate_plans_for_stay<'a>(
    rate_table: &'a RateTable,
    points: &[NearestPoint<'_>],
    in_date: &str,
    out_date: &str,
) -> Vec<&'a RatePlan> {
    points
        .iter()
        .filter_map(|p| rate_table.lookup(&Stay::new(p.hotel_id(), in_date, out_date)))
        .collect_vec()
}

/// enrichment stage: keeps the rate plans whose hotel has a profile.
pub fn profiles_for_rate_plans<'a>(
    profile_store: &'a ProfileStore,
    rate_plans: &[&RatePlan],
) -> Vec<&'a HotelProfile> {
    rate_plans
        .iter()
        .filter_map(|plan| profile_store.lookup(&plan.hotel_id))
        .collect_vec()
}

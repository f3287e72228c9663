use super::{GeoPoint, NearestPoint, PointPredicate};
use crate::util::geo::haversine;
use rstar::{PointDistance, RTree, RTreeObject, AABB};
use uom::si::f64::Length;
use uom::si::length::kilometer;

/// spatial index over hotel locations.
///
/// points are stored as earth-centered cartesian coordinates on a spherical
/// earth. the straight-line distance between two such coordinates grows
/// strictly with their great-circle distance, so the R-tree's euclidean
/// nearest-neighbor ordering is also great-circle ordering.
#[derive(Default)]
pub struct GeoIndex {
    tree: RTree<IndexedGeoPoint>,
}

struct IndexedGeoPoint {
    point: GeoPoint,
    position: [f64; 3],
}

impl IndexedGeoPoint {
    fn new(point: GeoPoint) -> IndexedGeoPoint {
        let position = haversine::to_cartesian_km(point.lon, point.lat);
        IndexedGeoPoint { point, position }
    }
}

impl RTreeObject for IndexedGeoPoint {
    type Envelope = AABB<[f64; 3]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.position)
    }
}

impl PointDistance for IndexedGeoPoint {
    fn distance_2(&self, point: &[f64; 3]) -> f64 {
        self.position
            .iter()
            .zip(point.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum()
    }
}

impl GeoIndex {
    pub fn new() -> GeoIndex {
        GeoIndex::default()
    }

    /// builds an index from a full feed in one pass. points with
    /// non-finite coordinates are dropped with a warning.
    pub fn from_points(points: Vec<GeoPoint>) -> GeoIndex {
        let entries = points
            .into_iter()
            .filter(valid_coordinate)
            .map(IndexedGeoPoint::new)
            .collect();
        GeoIndex {
            tree: RTree::bulk_load(entries),
        }
    }

    /// inserts a single point. ids are assumed unique per feed; inserting an
    /// id twice stores both entries.
    pub fn add(&mut self, point: GeoPoint) {
        if valid_coordinate(&point) {
            self.tree.insert(IndexedGeoPoint::new(point));
        }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// finds indexed points around `center`, nearest first.
    ///
    /// # Arguments
    ///
    /// * `center` - query location, x = longitude, y = latitude
    /// * `max_results` - cap on the number of accepted points returned
    /// * `max_radius` - great-circle distance bound, inclusive
    /// * `predicate` - inclusion filter; rejected points do not count toward `max_results`
    ///
    /// # Returns
    ///
    /// accepted points ordered by non-decreasing distance. an empty index,
    /// a non-finite center, a zero cap, or a negative/NaN radius all return
    /// an empty result.
    pub fn nearest<P>(
        &self,
        center: &geo::Point<f64>,
        max_results: usize,
        max_radius: Length,
        predicate: &P,
    ) -> Vec<NearestPoint<'_>>
    where
        P: PointPredicate + ?Sized,
    {
        let radius_km = max_radius.get::<kilometer>();
        if self.is_empty()
            || max_results == 0
            || radius_km.is_nan()
            || radius_km < 0.0
            || !center.x().is_finite()
            || !center.y().is_finite()
        {
            return vec![];
        }

        let max_chord = haversine::chord_length_km(max_radius);
        let max_chord_2 = max_chord * max_chord;
        let query = haversine::to_cartesian_km(center.x(), center.y());

        self.tree
            .nearest_neighbor_iter_with_distance_2(&query)
            .take_while(|(_, distance_2)| *distance_2 <= max_chord_2)
            .filter(|(entry, _)| predicate.accept(&entry.point))
            .take(max_results)
            .map(|(entry, distance_2)| NearestPoint {
                point: &entry.point,
                distance: haversine::great_circle_from_chord_km(distance_2.sqrt()),
            })
            .collect()
    }
}

fn valid_coordinate(point: &GeoPoint) -> bool {
    let valid = point.lat.is_finite() && point.lon.is_finite();
    if !valid {
        log::warn!(
            "skipping hotel {} with invalid coordinate ({}, {})",
            point.hotel_id,
            point.lat,
            point.lon
        );
    }
    valid
}

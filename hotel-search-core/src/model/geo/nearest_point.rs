use super::GeoPoint;
use uom::si::f64::Length;

/// a point returned from a nearest-neighbor query along with its
/// great-circle distance to the query center.
#[derive(Clone, Debug)]
pub struct NearestPoint<'a> {
    pub point: &'a GeoPoint,
    pub distance: Length,
}

impl NearestPoint<'_> {
    pub fn hotel_id(&self) -> &str {
        &self.point.hotel_id
    }
}

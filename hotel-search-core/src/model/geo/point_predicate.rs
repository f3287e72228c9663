use super::GeoPoint;

/// inclusion filter applied to each candidate of a nearest-neighbor query.
/// candidates rejected by the predicate are skipped and do not count toward
/// the result cap.
pub trait PointPredicate {
    fn accept(&self, point: &GeoPoint) -> bool;
}

impl<F> PointPredicate for F
where
    F: Fn(&GeoPoint) -> bool,
{
    fn accept(&self, point: &GeoPoint) -> bool {
        self(point)
    }
}

/// the no-op filter. hotel search queries always use this predicate.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptAll;

impl PointPredicate for AcceptAll {
    fn accept(&self, _point: &GeoPoint) -> bool {
        true
    }
}

mod geo_index;
mod geo_point;
mod nearest_point;
mod point_predicate;

pub use geo_index::GeoIndex;
pub use geo_point::GeoPoint;
pub use nearest_point::NearestPoint;
pub use point_predicate::{AcceptAll, PointPredicate};

mod feature_collection;

pub use feature_collection::{hotel_feature, hotels_feature_collection};

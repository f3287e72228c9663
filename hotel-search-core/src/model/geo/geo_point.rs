use serde::{Deserialize, Serialize};

/// a hotel location as it appears in the geo feed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GeoPoint {
    pub hotel_id: String,
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(hotel_id: &str, lat: f64, lon: f64) -> GeoPoint {
        GeoPoint {
            hotel_id: hotel_id.to_string(),
            lat,
            lon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_geo_point() {
        let json = r#"{"hotelId": "1", "lat": 37.7867, "lon": -122.4112}"#;
        let point: GeoPoint = serde_json::from_str(json).unwrap();
        assert_eq!(point, GeoPoint::new("1", 37.7867, -122.4112));
    }

    #[test]
    fn test_missing_fields_are_zeroed() {
        let point: GeoPoint = serde_json::from_str(r#"{"hotelId": "1"}"#).unwrap();
        assert_eq!(point, GeoPoint::new("1", 0.0, 0.0));
    }
}

//! renders search results as GeoJSON.
use geojson::{feature::Id, Feature, FeatureCollection, Geometry, JsonObject};
use hotel_search_core::model::profile::HotelProfile;
use serde_json::json;

/// one feature per hotel, in the order given.
pub fn hotels_feature_collection(hotels: &[&HotelProfile]) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: hotels.iter().map(|hotel| hotel_feature(hotel)).collect(),
        foreign_members: None,
    }
}

/// a point feature at the hotel's address. GeoJSON positions are
/// `[longitude, latitude]`.
pub fn hotel_feature(hotel: &HotelProfile) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert(String::from("name"), json![hotel.name]);
    properties.insert(String::from("phone_number"), json![hotel.phone_number]);
    let geometry = Geometry::new(geojson::Value::from(&hotel.address.to_point()));
    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: Some(Id::String(hotel.id.clone())),
        properties: Some(properties),
        foreign_members: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotel_search_core::model::profile::Address;

    fn profile(id: &str, name: &str, lat: f64, lon: f64) -> HotelProfile {
        HotelProfile {
            id: id.to_string(),
            name: name.to_string(),
            phone_number: "(212) 555-0101".to_string(),
            description: "should not be rendered".to_string(),
            address: Address {
                lat,
                lon,
                ..Address::default()
            },
            images: vec![],
        }
    }

    #[test]
    fn test_empty_collection() {
        let value = serde_json::to_value(hotels_feature_collection(&[])).unwrap();
        assert_eq!(value, json!({"type": "FeatureCollection", "features": []}));
    }

    #[test]
    fn test_feature_shape() {
        let hotel = profile("7", "Harbor Inn", 40.0, -73.0);
        let value = serde_json::to_value(hotels_feature_collection(&[&hotel])).unwrap();
        let expected = json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "id": "7",
                "properties": {"name": "Harbor Inn", "phone_number": "(212) 555-0101"},
                "geometry": {"type": "Point", "coordinates": [-73.0, 40.0]}
            }]
        });
        assert_eq!(value, expected);
    }

    #[test]
    fn test_longitude_serialized_first() {
        let hotel = profile("7", "Harbor Inn", 40.0, -73.0);
        let text = serde_json::to_string(&hotel_feature(&hotel)).unwrap();
        assert!(text.contains("[-73.0,40.0]"));
    }

    #[test]
    fn test_order_preserved() {
        let a = profile("b", "B", 1.0, 1.0);
        let b = profile("a", "A", 2.0, 2.0);
        let value = serde_json::to_value(hotels_feature_collection(&[&a, &b])).unwrap();
        let ids: Vec<&str> = value["features"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}

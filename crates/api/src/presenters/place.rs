//! Presenter for places.

use serde_json::json;
use tripline_core::error::CoreError;
use tripline_db::models::place::Place;

use super::{coerce_coord, JsonMap};

/// Shape a place for embedding or direct response.
pub fn present(place: &Place) -> Result<JsonMap, CoreError> {
    let mut out = JsonMap::new();
    out.insert("id".into(), json!(place.id));
    out.insert("name".into(), json!(place.name));
    out.insert("address".into(), json!(place.address));
    out.insert("category".into(), json!(place.category));
    out.insert("lat".into(), json!(coerce_coord(&place.lat, "lat")?));
    out.insert("lng".into(), json!(coerce_coord(&place.lng, "lng")?));
    out.insert("naver_place_id".into(), json!(place.naver_place_id));
    Ok(out)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::{TimeZone, Utc};
    use tripline_db::models::place::Place;

    pub fn place() -> Place {
        Place {
            id: 11,
            name: "Gwangjang Market".to_string(),
            address: Some("88 Changgyeonggung-ro, Jongno-gu".to_string()),
            category: Some("market".to_string()),
            lat: "37.5700510".to_string(),
            lng: "126.9996350".to_string(),
            naver_place_id: Some("naver-11".to_string()),
            created_at: Utc.with_ymd_and_hms(2024, 4, 1, 9, 0, 0).unwrap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::place;
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_coordinates_are_numbers_not_strings() {
        let out = present(&place()).unwrap();
        assert_eq!(out["lat"], json!(37.570051));
        assert_eq!(out["lng"], json!(126.999635));
        assert!(out["lat"].is_f64());
    }

    #[test]
    fn test_malformed_coordinate_is_an_error() {
        let mut bad = place();
        bad.lat = "37,5700510".to_string();
        assert!(present(&bad).is_err());
    }

    #[test]
    fn test_absent_optional_fields_render_null() {
        let mut sparse = place();
        sparse.address = None;
        sparse.category = None;
        sparse.naver_place_id = None;
        let out = present(&sparse).unwrap();
        assert_eq!(out["address"], Value::Null);
        assert_eq!(out["category"], Value::Null);
        assert_eq!(out["naver_place_id"], Value::Null);
    }
}

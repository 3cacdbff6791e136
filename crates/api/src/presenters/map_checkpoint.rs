//! Presenter for map checkpoints.

use serde_json::{json, Value};
use tripline_core::error::CoreError;
use tripline_core::rel::Rel;
use tripline_db::models::checkpoint::{MapCheckpoint, MapCheckpointView};

use super::{coerce_coord, iso8601_or_null, place, JsonMap};

/// Shape a checkpoint with its gated place relation.
///
/// The `place` key is present only when the relation was eagerly loaded;
/// a loaded-but-deleted place renders as `null`.
pub fn present(view: &MapCheckpointView) -> Result<JsonMap, CoreError> {
    let mut out = present_fields(&view.checkpoint)?;

    if let Rel::Loaded(loaded) = &view.place {
        let embedded = match loaded {
            Some(p) => Value::Object(place::present(p)?),
            None => Value::Null,
        };
        out.insert("place".into(), embedded);
    }

    Ok(out)
}

/// Shape a checkpoint's own fields, without any relation embed.
///
/// Also used when a checkpoint appears as a favorite's target.
pub fn present_fields(checkpoint: &MapCheckpoint) -> Result<JsonMap, CoreError> {
    let mut out = JsonMap::new();
    out.insert("id".into(), json!(checkpoint.id));
    out.insert("trip_id".into(), json!(checkpoint.trip_id));
    out.insert("user_id".into(), json!(checkpoint.user_id));
    out.insert("place_id".into(), json!(checkpoint.place_id));
    out.insert("title".into(), json!(checkpoint.title));
    out.insert("lat".into(), json!(coerce_coord(&checkpoint.lat, "lat")?));
    out.insert("lng".into(), json!(coerce_coord(&checkpoint.lng, "lng")?));
    out.insert(
        "checked_in_at".into(),
        iso8601_or_null(checkpoint.checked_in_at.as_ref()),
    );
    out.insert("note".into(), json!(checkpoint.note));
    Ok(out)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::{TimeZone, Utc};
    use tripline_db::models::checkpoint::MapCheckpoint;

    pub fn checkpoint() -> MapCheckpoint {
        MapCheckpoint {
            id: 21,
            trip_id: 4,
            user_id: 9,
            place_id: Some(11),
            title: "Morning market stop".to_string(),
            lat: "37.5700510".to_string(),
            lng: "126.9996350".to_string(),
            checked_in_at: None,
            note: Some("try the bindaetteok".to_string()),
            created_at: Utc.with_ymd_and_hms(2024, 6, 6, 7, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 6, 6, 7, 0, 0).unwrap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::checkpoint;
    use super::*;
    use crate::presenters::place::fixtures::place;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_place_key_absent_when_gate_unset() {
        let view = MapCheckpointView {
            checkpoint: checkpoint(),
            place: Rel::NotLoaded,
        };
        let out = present(&view).unwrap();
        assert!(!out.contains_key("place"));
    }

    #[test]
    fn test_place_embedded_as_shaped_structure_when_loaded() {
        let view = MapCheckpointView {
            checkpoint: checkpoint(),
            place: Rel::found(place()),
        };
        let out = present(&view).unwrap();
        let embedded = out["place"].as_object().expect("place must be an object");
        assert_eq!(embedded["name"], json!("Gwangjang Market"));
        // Shaped by the place presenter, so coordinates are numbers.
        assert!(embedded["lat"].is_f64());
    }

    #[test]
    fn test_deleted_place_renders_null_not_error() {
        let view = MapCheckpointView {
            checkpoint: checkpoint(),
            place: Rel::missing(),
        };
        let out = present(&view).unwrap();
        assert_eq!(out["place"], Value::Null);
    }

    #[test]
    fn test_null_check_in_renders_null() {
        let out = present_fields(&checkpoint()).unwrap();
        assert_eq!(out["checked_in_at"], Value::Null);
    }

    #[test]
    fn test_check_in_renders_iso8601() {
        let mut cp = checkpoint();
        cp.checked_in_at = Some(Utc.with_ymd_and_hms(2024, 6, 6, 9, 15, 0).unwrap());
        let out = present_fields(&cp).unwrap();
        assert_eq!(out["checked_in_at"], json!("2024-06-06T09:15:00+00:00"));
    }

    #[test]
    fn test_string_stored_coordinates_coerce_to_floats() {
        let out = present_fields(&checkpoint()).unwrap();
        assert_eq!(out["lat"], json!(37.570051));
        assert_eq!(out["lng"], json!(126.999635));
    }

    #[test]
    fn test_corrupt_coordinate_propagates_error() {
        let mut cp = checkpoint();
        cp.lng = "east-ish".to_string();
        let view = MapCheckpointView {
            checkpoint: cp,
            place: Rel::NotLoaded,
        };
        assert!(present(&view).is_err());
    }
}

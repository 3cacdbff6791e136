//! Presenter for favorites, including the polymorphic target dispatch.

use serde_json::{json, Value};
use tripline_core::error::CoreError;
use tripline_core::favorite::short_label;
use tripline_core::rel::Rel;
use tripline_db::models::favorite::{FavoriteView, Favoritable};

use super::{iso8601_or_null, map_checkpoint, place, trip, JsonMap};

/// Shape a favorite.
///
/// `favoritable_type` carries the stable short label; unknown internal
/// discriminators pass through verbatim. The `favoritable` key appears
/// only when the relation gate is set, dispatching on the resolved target
/// variant; an unresolvable target renders `null`.
pub fn present(view: &FavoriteView) -> Result<JsonMap, CoreError> {
    let favorite = &view.favorite;
    let mut out = JsonMap::new();
    out.insert("id".into(), json!(favorite.id));
    out.insert("user_id".into(), json!(favorite.user_id));
    out.insert(
        "favoritable_type".into(),
        json!(short_label(&favorite.favoritable_type)),
    );
    out.insert("favoritable_id".into(), json!(favorite.favoritable_id));
    out.insert(
        "created_at".into(),
        iso8601_or_null(favorite.created_at.as_ref()),
    );
    out.insert(
        "updated_at".into(),
        iso8601_or_null(favorite.updated_at.as_ref()),
    );

    if let Rel::Loaded(target) = &view.favoritable {
        let embedded = match target {
            Some(Favoritable::Place(p)) => Value::Object(place::present(p)?),
            Some(Favoritable::Trip(t)) => Value::Object(trip::present(t)),
            Some(Favoritable::MapCheckpoint(c)) => {
                Value::Object(map_checkpoint::present_fields(c)?)
            }
            None => Value::Null,
        };
        out.insert("favoritable".into(), embedded);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenters::map_checkpoint::fixtures::checkpoint;
    use crate::presenters::place::fixtures::place as place_fixture;
    use crate::presenters::trip::fixtures::trip as trip_fixture;
    use chrono::{TimeZone, Utc};
    use tripline_db::models::favorite::Favorite;

    fn favorite(kind: &str, target_id: i64) -> Favorite {
        Favorite {
            id: 1,
            user_id: 9,
            favoritable_type: kind.to_string(),
            favoritable_id: target_id,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_unloaded_favorite_matches_contract_exactly() {
        let view = FavoriteView {
            favorite: favorite("Trip", 4),
            favoritable: Rel::NotLoaded,
        };
        let out = present(&view).unwrap();

        assert_eq!(
            Value::Object(out),
            json!({
                "id": 1,
                "user_id": 9,
                "favoritable_type": "trip",
                "favoritable_id": 4,
                "created_at": null,
                "updated_at": null,
            })
        );
    }

    #[test]
    fn test_favoritable_key_absent_when_gate_unset() {
        let view = FavoriteView {
            favorite: favorite("Place", 11),
            favoritable: Rel::NotLoaded,
        };
        let out = present(&view).unwrap();
        assert!(!out.contains_key("favoritable"));
    }

    #[test]
    fn test_all_known_discriminators_translate() {
        for (internal, label) in [
            ("Place", "place"),
            ("Trip", "trip"),
            ("MapCheckpoint", "map_checkpoint"),
        ] {
            let view = FavoriteView {
                favorite: favorite(internal, 1),
                favoritable: Rel::NotLoaded,
            };
            let out = present(&view).unwrap();
            assert_eq!(out["favoritable_type"], json!(label));
        }
    }

    #[test]
    fn test_unknown_discriminator_passes_through() {
        let view = FavoriteView {
            favorite: favorite("Restaurant", 8),
            favoritable: Rel::NotLoaded,
        };
        let out = present(&view).unwrap();
        assert_eq!(out["favoritable_type"], json!("Restaurant"));
    }

    #[test]
    fn test_loaded_place_target_dispatches_to_place_presenter() {
        let view = FavoriteView {
            favorite: favorite("Place", 11),
            favoritable: Rel::found(Favoritable::Place(place_fixture())),
        };
        let out = present(&view).unwrap();
        let embedded = out["favoritable"].as_object().unwrap();
        assert_eq!(embedded["name"], json!("Gwangjang Market"));
        assert!(embedded["lat"].is_f64());
    }

    #[test]
    fn test_loaded_trip_target_dispatches_to_trip_presenter() {
        let view = FavoriteView {
            favorite: favorite("Trip", 4),
            favoritable: Rel::found(Favoritable::Trip(trip_fixture())),
        };
        let out = present(&view).unwrap();
        assert_eq!(out["favoritable"]["start_date"], json!("2024-06-06"));
    }

    #[test]
    fn test_loaded_checkpoint_target_has_no_nested_place() {
        let view = FavoriteView {
            favorite: favorite("MapCheckpoint", 21),
            favoritable: Rel::found(Favoritable::MapCheckpoint(checkpoint())),
        };
        let out = present(&view).unwrap();
        let embedded = out["favoritable"].as_object().unwrap();
        assert_eq!(embedded["title"], json!("Morning market stop"));
        assert!(!embedded.contains_key("place"));
    }

    #[test]
    fn test_deleted_target_renders_null_with_gate_set() {
        let view = FavoriteView {
            favorite: favorite("Trip", 404),
            favoritable: Rel::missing(),
        };
        let out = present(&view).unwrap();
        assert_eq!(out["favoritable"], Value::Null);
    }

    #[test]
    fn test_unknown_discriminator_with_gate_set_renders_null() {
        // The repository cannot resolve an unknown tag, so it records the
        // relation as loaded-but-missing.
        let view = FavoriteView {
            favorite: favorite("Restaurant", 8),
            favoritable: Rel::missing(),
        };
        let out = present(&view).unwrap();
        assert_eq!(out["favoritable"], Value::Null);
        assert_eq!(out["favoritable_type"], json!("Restaurant"));
    }

    #[test]
    fn test_timestamps_render_iso8601_when_present() {
        let mut fav = favorite("Trip", 4);
        fav.created_at = Some(Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap());
        let view = FavoriteView {
            favorite: fav,
            favoritable: Rel::NotLoaded,
        };
        let out = present(&view).unwrap();
        assert_eq!(out["created_at"], json!("2024-05-01T00:00:00+00:00"));
        assert_eq!(out["updated_at"], Value::Null);
    }
}

//! Presenter for trip diaries.

use serde_json::json;
use tripline_core::rel::Rel;
use tripline_db::models::diary::TripDiaryView;

use super::JsonMap;

/// Shape a diary entry.
///
/// `entry_date` renders date-only even though storage carries a time
/// component. `trip` and `user` are raw embeds (serde serialization of
/// the model, no sub-presenter) and appear only when their gates are
/// set; `created_at`/`updated_at` likewise pass through serde's default
/// timestamp serialization. Both are long-standing shapes existing
/// consumers rely on.
pub fn present(view: &TripDiaryView) -> JsonMap {
    let diary = &view.diary;
    let mut out = JsonMap::new();
    out.insert("id".into(), json!(diary.id));
    out.insert("trip_id".into(), json!(diary.trip_id));
    out.insert("user_id".into(), json!(diary.user_id));
    out.insert(
        "entry_date".into(),
        json!(diary.entry_date.format("%Y-%m-%d").to_string()),
    );
    out.insert("text".into(), json!(diary.text));
    out.insert("mood".into(), json!(diary.mood));
    out.insert("created_at".into(), json!(diary.created_at));
    out.insert("updated_at".into(), json!(diary.updated_at));

    if let Rel::Loaded(trip) = &view.trip {
        out.insert("trip".into(), json!(trip));
    }
    if let Rel::Loaded(user) = &view.user {
        out.insert("user".into(), json!(user));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenters::trip::fixtures::trip as trip_fixture;
    use chrono::{TimeZone, Utc};
    use serde_json::Value;
    use tripline_db::models::diary::TripDiary;
    use tripline_db::models::user::User;

    fn diary() -> TripDiary {
        TripDiary {
            id: 31,
            trip_id: 4,
            user_id: 9,
            // Stored with a time component; output must be date-only.
            entry_date: Utc.with_ymd_and_hms(2024, 6, 7, 22, 45, 10).unwrap(),
            text: "Hiked Hallasan, legs destroyed.".to_string(),
            mood: Some("tired".to_string()),
            created_at: Utc.with_ymd_and_hms(2024, 6, 7, 23, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 6, 7, 23, 0, 0).unwrap(),
        }
    }

    fn user() -> User {
        User {
            id: 9,
            email: "mina@example.com".to_string(),
            display_name: "Mina".to_string(),
            avatar_url: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_entry_date_strips_time_component() {
        let view = TripDiaryView {
            diary: diary(),
            trip: Rel::NotLoaded,
            user: Rel::NotLoaded,
        };
        let out = present(&view);
        assert_eq!(out["entry_date"], json!("2024-06-07"));
    }

    #[test]
    fn test_relations_absent_when_gates_unset() {
        let view = TripDiaryView {
            diary: diary(),
            trip: Rel::NotLoaded,
            user: Rel::NotLoaded,
        };
        let out = present(&view);
        assert!(!out.contains_key("trip"));
        assert!(!out.contains_key("user"));
    }

    #[test]
    fn test_loaded_relations_embed_raw_models() {
        let view = TripDiaryView {
            diary: diary(),
            trip: Rel::found(trip_fixture()),
            user: Rel::found(user()),
        };
        let out = present(&view);
        // Raw serde embed: the trip's own timestamps are included, which
        // the shaped trip presenter would have dropped.
        assert!(out["trip"].get("created_at").is_some());
        assert_eq!(out["user"]["display_name"], json!("Mina"));
    }

    #[test]
    fn test_deleted_relation_embeds_null() {
        let view = TripDiaryView {
            diary: diary(),
            trip: Rel::missing(),
            user: Rel::NotLoaded,
        };
        let out = present(&view);
        assert_eq!(out["trip"], Value::Null);
    }

    #[test]
    fn test_timestamps_pass_through_serde_default() {
        let view = TripDiaryView {
            diary: diary(),
            trip: Rel::NotLoaded,
            user: Rel::NotLoaded,
        };
        let out = present(&view);
        // Default chrono serde serialization, not the presenter's
        // explicit RFC 3339 formatting.
        assert_eq!(out["created_at"], json!(diary().created_at));
    }
}

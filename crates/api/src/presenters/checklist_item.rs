//! Presenter for checklist items.

use serde_json::{json, Value};
use tripline_core::rel::Rel;
use tripline_db::models::checklist::ChecklistItemView;

use super::{trip, JsonMap};

/// Shape a checklist item.
///
/// Unlike the other gated embeds, the `trip` key is ALWAYS present: the
/// trip's shape is part of this entity's contract. When the relation was
/// not loaded (or the trip is gone) the key degrades to an empty object
/// rather than disappearing.
pub fn present(view: &ChecklistItemView) -> JsonMap {
    let item = &view.item;
    let mut out = JsonMap::new();
    out.insert("id".into(), json!(item.id));
    out.insert("trip_id".into(), json!(item.trip_id));
    out.insert("user_id".into(), json!(item.user_id));
    out.insert("content".into(), json!(item.content));
    out.insert("is_checked".into(), json!(item.is_checked));

    let embedded = match &view.trip {
        Rel::Loaded(Some(t)) => Value::Object(trip::present(t)),
        _ => Value::Object(JsonMap::new()),
    };
    out.insert("trip".into(), embedded);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenters::trip::fixtures::trip as trip_fixture;
    use chrono::{TimeZone, Utc};
    use tripline_db::models::checklist::ChecklistItem;

    fn item() -> ChecklistItem {
        ChecklistItem {
            id: 2,
            trip_id: 4,
            user_id: 9,
            content: "Pack sunscreen".to_string(),
            is_checked: false,
            created_at: Utc.with_ymd_and_hms(2024, 5, 20, 10, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 5, 20, 10, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_trip_key_present_even_when_gate_unset() {
        let view = ChecklistItemView {
            item: item(),
            trip: Rel::NotLoaded,
        };
        let out = present(&view);
        assert_eq!(out["id"], json!(2));
        assert_eq!(out["trip_id"], json!(4));
        assert_eq!(out["content"], json!("Pack sunscreen"));
        assert_eq!(out["is_checked"], json!(false));
        // Degraded placeholder, not an absent key and not null.
        assert_eq!(out["trip"], json!({}));
    }

    #[test]
    fn test_trip_embedded_shaped_when_loaded() {
        let view = ChecklistItemView {
            item: item(),
            trip: Rel::found(trip_fixture()),
        };
        let out = present(&view);
        let embedded = out["trip"].as_object().expect("trip must be an object");
        assert_eq!(embedded["title"], json!("Jeju long weekend"));
        assert_eq!(embedded["start_date"], json!("2024-06-06"));
    }

    #[test]
    fn test_deleted_trip_degrades_to_empty_object() {
        let view = ChecklistItemView {
            item: item(),
            trip: Rel::missing(),
        };
        let out = present(&view);
        assert_eq!(out["trip"], json!({}));
    }
}

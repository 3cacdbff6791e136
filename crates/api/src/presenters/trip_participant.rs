//! Presenter for trip participants.

use serde_json::json;
use tripline_core::rel::Rel;
use tripline_db::models::participant::TripParticipantView;

use super::JsonMap;

/// Shape a participant.
///
/// Same raw-embed-if-loaded pattern as the diary presenter: `user` and
/// `trip` are serde-serialized models, present only when gated, and
/// `joined_at` passes through serde's default timestamp serialization.
pub fn present(view: &TripParticipantView) -> JsonMap {
    let participant = &view.participant;
    let mut out = JsonMap::new();
    out.insert("id".into(), json!(participant.id));
    out.insert("trip_id".into(), json!(participant.trip_id));
    out.insert("user_id".into(), json!(participant.user_id));
    out.insert("role".into(), json!(participant.role));
    out.insert("joined_at".into(), json!(participant.joined_at));

    if let Rel::Loaded(user) = &view.user {
        out.insert("user".into(), json!(user));
    }
    if let Rel::Loaded(trip) = &view.trip {
        out.insert("trip".into(), json!(trip));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenters::trip::fixtures::trip as trip_fixture;
    use chrono::{TimeZone, Utc};
    use tripline_db::models::participant::TripParticipant;
    use tripline_db::models::user::User;

    fn participant() -> TripParticipant {
        TripParticipant {
            id: 41,
            trip_id: 4,
            user_id: 12,
            role: "editor".to_string(),
            joined_at: Utc.with_ymd_and_hms(2024, 5, 3, 14, 0, 0).unwrap(),
        }
    }

    fn user() -> User {
        User {
            id: 12,
            email: "jun@example.com".to_string(),
            display_name: "Jun".to_string(),
            avatar_url: Some("https://cdn.example.com/jun.png".to_string()),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_scalars_and_default_timestamp_serialization() {
        let view = TripParticipantView {
            participant: participant(),
            user: Rel::NotLoaded,
            trip: Rel::NotLoaded,
        };
        let out = present(&view);
        assert_eq!(out["role"], json!("editor"));
        assert_eq!(out["joined_at"], json!(participant().joined_at));
        assert!(!out.contains_key("user"));
        assert!(!out.contains_key("trip"));
    }

    #[test]
    fn test_loaded_relations_embed_raw_models() {
        let view = TripParticipantView {
            participant: participant(),
            user: Rel::found(user()),
            trip: Rel::found(trip_fixture()),
        };
        let out = present(&view);
        assert_eq!(out["user"]["email"], json!("jun@example.com"));
        assert_eq!(out["trip"]["destination"], json!("Jeju"));
    }
}

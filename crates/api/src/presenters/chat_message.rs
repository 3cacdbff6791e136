//! Presenter for chat messages.

use serde_json::json;
use tripline_db::models::chat::ChatMessageView;

use super::{iso8601_or_null, JsonMap};

/// Shape a chat message.
///
/// The referenced entity is embedded raw whenever it resolved to
/// something non-null, with no type-label translation and no
/// sub-presenter dispatch. This is deliberately asymmetric with the
/// favorite presenter; existing consumers depend on the raw shape, so
/// it is reproduced rather than unified.
pub fn present(view: &ChatMessageView) -> JsonMap {
    let message = &view.message;
    let mut out = JsonMap::new();
    out.insert("id".into(), json!(message.id));
    out.insert("session_id".into(), json!(message.session_id));
    out.insert("sender".into(), json!(message.sender));
    out.insert("message".into(), json!(message.message));
    out.insert("metadata".into(), json!(message.metadata));
    out.insert("entity_type".into(), json!(message.entity_type));
    out.insert("entity_id".into(), json!(message.entity_id));
    out.insert(
        "created_at".into(),
        iso8601_or_null(Some(&message.created_at)),
    );

    if let Some(entity) = &view.entity {
        out.insert("entity".into(), entity.clone());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::Value;
    use tripline_db::models::chat::ChatMessage;

    fn message() -> ChatMessage {
        ChatMessage {
            id: 51,
            session_id: 3,
            sender: "assistant".to_string(),
            message: "Gwangjang Market is a 10 minute walk away.".to_string(),
            metadata: Some(json!({"model": "hcx-003"})),
            entity_type: Some("Place".to_string()),
            entity_id: Some(11),
            created_at: Utc.with_ymd_and_hms(2024, 6, 6, 8, 5, 0).unwrap(),
        }
    }

    #[test]
    fn test_entity_embedded_raw_when_resolved() {
        let raw = json!({"id": 11, "name": "Gwangjang Market", "lat": "37.5700510"});
        let view = ChatMessageView {
            message: message(),
            entity: Some(raw.clone()),
        };
        let out = present(&view);
        // Raw embed: no presenter shaping, coordinates stay strings.
        assert_eq!(out["entity"], raw);
        assert_eq!(out["entity_type"], json!("Place"));
    }

    #[test]
    fn test_entity_key_absent_when_unresolved() {
        // Dangling reference (target row deleted): treated as not
        // resolved, never a fault.
        let view = ChatMessageView {
            message: message(),
            entity: None,
        };
        let out = present(&view);
        assert!(!out.contains_key("entity"));
        // The scalar reference columns still pass through.
        assert_eq!(out["entity_id"], json!(11));
    }

    #[test]
    fn test_created_at_renders_iso8601() {
        let view = ChatMessageView {
            message: message(),
            entity: None,
        };
        let out = present(&view);
        assert_eq!(out["created_at"], json!("2024-06-06T08:05:00+00:00"));
    }

    #[test]
    fn test_absent_metadata_renders_null() {
        let mut msg = message();
        msg.metadata = None;
        msg.entity_type = None;
        msg.entity_id = None;
        let view = ChatMessageView {
            message: msg,
            entity: None,
        };
        let out = present(&view);
        assert_eq!(out["metadata"], Value::Null);
        assert_eq!(out["entity_type"], Value::Null);
    }
}

//! Repository for chat sessions and messages.

use std::collections::HashMap;

use sqlx::PgPool;
use tripline_core::types::DbId;

use crate::models::chat::{ChatMessage, ChatMessageView, ChatSession, CreateChatMessage};

/// Column list for `chat_sessions` queries.
const SESSION_COLUMNS: &str = "id, user_id, trip_id, title, created_at, updated_at";

/// Column list for `chat_messages` queries.
const MESSAGE_COLUMNS: &str =
    "id, session_id, sender, message, metadata, entity_type, entity_id, created_at";

/// Tables a chat message may reference, keyed by stored entity type.
///
/// The table name is looked up from this closed set, never interpolated
/// from client input.
const ENTITY_TABLES: &[(&str, &str)] = &[
    ("Place", "places"),
    ("Trip", "trips"),
    ("MapCheckpoint", "map_checkpoints"),
];

/// Provides CRUD operations for chat sessions and messages.
pub struct ChatRepo;

impl ChatRepo {
    /// List a user's chat sessions, most recently updated first.
    pub async fn list_sessions(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ChatSession>, sqlx::Error> {
        sqlx::query_as::<_, ChatSession>(&format!(
            "SELECT {SESSION_COLUMNS} FROM chat_sessions \
             WHERE user_id = $1 \
             ORDER BY updated_at DESC \
             LIMIT $2 OFFSET $3"
        ))
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
    }

    /// Create a chat session.
    pub async fn create_session(
        pool: &PgPool,
        user_id: DbId,
        trip_id: Option<DbId>,
        title: Option<&str>,
    ) -> Result<ChatSession, sqlx::Error> {
        sqlx::query_as::<_, ChatSession>(&format!(
            "INSERT INTO chat_sessions (user_id, trip_id, title) \
             VALUES ($1, $2, $3) \
             RETURNING {SESSION_COLUMNS}"
        ))
        .bind(user_id)
        .bind(trip_id)
        .bind(title)
        .fetch_one(pool)
        .await
    }

    /// Fetch a session, scoped to its owning user.
    pub async fn get_session(
        pool: &PgPool,
        session_id: DbId,
        user_id: DbId,
    ) -> Result<Option<ChatSession>, sqlx::Error> {
        sqlx::query_as::<_, ChatSession>(&format!(
            "SELECT {SESSION_COLUMNS} FROM chat_sessions WHERE id = $1 AND user_id = $2"
        ))
        .bind(session_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }

    /// List a session's messages, oldest first, resolving each referenced
    /// entity to its raw JSON record.
    ///
    /// References are resolved in one `id = ANY($1)` batch per entity
    /// type, not per message. A dangling or unrecognized reference
    /// resolves to `None`; the presenter then omits the embed rather
    /// than faulting.
    pub async fn list_messages(
        pool: &PgPool,
        session_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ChatMessageView>, sqlx::Error> {
        let messages = sqlx::query_as::<_, ChatMessage>(&format!(
            "SELECT {MESSAGE_COLUMNS} FROM chat_messages \
             WHERE session_id = $1 \
             ORDER BY created_at ASC \
             LIMIT $2 OFFSET $3"
        ))
        .bind(session_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        let resolved = Self::resolve_entities(pool, &messages).await?;
        Ok(Self::stitch(messages, &resolved))
    }

    /// Append a message to a session and bump the session's timestamp.
    pub async fn create_message(
        pool: &PgPool,
        session_id: DbId,
        sender: &str,
        input: &CreateChatMessage,
    ) -> Result<ChatMessageView, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let message = sqlx::query_as::<_, ChatMessage>(&format!(
            "INSERT INTO chat_messages (session_id, sender, message, metadata, entity_type, entity_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {MESSAGE_COLUMNS}"
        ))
        .bind(session_id)
        .bind(sender)
        .bind(&input.message)
        .bind(&input.metadata)
        .bind(&input.entity_type)
        .bind(input.entity_id)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE chat_sessions SET updated_at = NOW() WHERE id = $1")
            .bind(session_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        let entity = Self::resolve_entity(pool, &message).await?;
        Ok(ChatMessageView { message, entity })
    }

    /// Resolve a message's entity reference to the raw row as JSON.
    async fn resolve_entity(
        pool: &PgPool,
        message: &ChatMessage,
    ) -> Result<Option<serde_json::Value>, sqlx::Error> {
        let resolved = Self::resolve_entities(pool, std::slice::from_ref(message)).await?;
        Ok(Self::lookup(message, &resolved))
    }

    /// Batch-resolve the entity references of a message set.
    ///
    /// Ids are grouped per entity type, each group fetched with a single
    /// `id = ANY($1)` query against the table from the closed set.
    async fn resolve_entities(
        pool: &PgPool,
        messages: &[ChatMessage],
    ) -> Result<HashMap<(String, DbId), serde_json::Value>, sqlx::Error> {
        let mut resolved = HashMap::new();

        for (tag, table) in ENTITY_TABLES {
            let ids = Self::ids_for(messages, tag);
            if ids.is_empty() {
                continue;
            }

            let rows = sqlx::query_as::<_, (DbId, serde_json::Value)>(&format!(
                "SELECT t.id, row_to_json(t) FROM {table} t WHERE t.id = ANY($1)"
            ))
            .bind(&ids)
            .fetch_all(pool)
            .await?;
            for (id, json) in rows {
                resolved.insert((tag.to_string(), id), json);
            }
        }

        Ok(resolved)
    }

    /// Referenced ids carrying the given entity type.
    fn ids_for(messages: &[ChatMessage], tag: &str) -> Vec<DbId> {
        messages
            .iter()
            .filter(|m| m.entity_type.as_deref() == Some(tag))
            .filter_map(|m| m.entity_id)
            .collect()
    }

    /// Pair each message with its resolved entity, if any.
    fn stitch(
        messages: Vec<ChatMessage>,
        resolved: &HashMap<(String, DbId), serde_json::Value>,
    ) -> Vec<ChatMessageView> {
        messages
            .into_iter()
            .map(|message| {
                let entity = Self::lookup(&message, resolved);
                ChatMessageView { message, entity }
            })
            .collect()
    }

    fn lookup(
        message: &ChatMessage,
        resolved: &HashMap<(String, DbId), serde_json::Value>,
    ) -> Option<serde_json::Value> {
        message
            .entity_type
            .as_ref()
            .zip(message.entity_id)
            .and_then(|(kind, id)| resolved.get(&(kind.clone(), id)).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn message(id: DbId, entity_type: Option<&str>, entity_id: Option<DbId>) -> ChatMessage {
        ChatMessage {
            id,
            session_id: 1,
            sender: "assistant".to_string(),
            message: "here is a spot".to_string(),
            metadata: None,
            entity_type: entity_type.map(str::to_string),
            entity_id,
            created_at: Utc.with_ymd_and_hms(2024, 6, 7, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn groups_referenced_ids_by_entity_type() {
        let messages = vec![
            message(1, Some("Place"), Some(11)),
            message(2, Some("Trip"), Some(4)),
            message(3, Some("Place"), Some(12)),
            message(4, None, None),
            message(5, Some("Sticker"), Some(99)),
        ];

        assert_eq!(ChatRepo::ids_for(&messages, "Place"), vec![11, 12]);
        assert_eq!(ChatRepo::ids_for(&messages, "Trip"), vec![4]);
        assert!(ChatRepo::ids_for(&messages, "MapCheckpoint").is_empty());
    }

    #[test]
    fn stitch_attaches_each_message_to_its_own_entity() {
        let messages = vec![
            message(1, Some("Place"), Some(11)),
            message(2, Some("Place"), Some(12)),
            message(3, Some("Trip"), Some(4)),
        ];
        let mut resolved = HashMap::new();
        resolved.insert(("Place".to_string(), 11), json!({ "id": 11 }));
        resolved.insert(("Place".to_string(), 12), json!({ "id": 12 }));
        resolved.insert(("Trip".to_string(), 4), json!({ "id": 4 }));

        let views = ChatRepo::stitch(messages, &resolved);
        assert_eq!(views[0].entity, Some(json!({ "id": 11 })));
        assert_eq!(views[1].entity, Some(json!({ "id": 12 })));
        assert_eq!(views[2].entity, Some(json!({ "id": 4 })));
    }

    #[test]
    fn stitch_leaves_dangling_and_unknown_references_unresolved() {
        let messages = vec![
            message(1, Some("Place"), Some(11)),
            message(2, Some("Sticker"), Some(11)),
            message(3, None, None),
        ];
        let resolved = HashMap::new();

        let views = ChatRepo::stitch(messages, &resolved);
        assert!(views.iter().all(|v| v.entity.is_none()));
    }
}

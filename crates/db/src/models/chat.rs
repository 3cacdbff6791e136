//! Chat session and message models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tripline_core::types::{DbId, Timestamp};

/// A row from the `chat_sessions` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct ChatSession {
    pub id: DbId,
    pub user_id: DbId,
    pub trip_id: Option<DbId>,
    pub title: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `chat_messages` table.
///
/// `entity_type`/`entity_id` optionally point a message at a platform
/// entity (a place the assistant recommended, a checkpoint it created).
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct ChatMessage {
    pub id: DbId,
    pub session_id: DbId,
    pub sender: String,
    pub message: String,
    pub metadata: Option<serde_json::Value>,
    pub entity_type: Option<String>,
    pub entity_id: Option<DbId>,
    pub created_at: Timestamp,
}

/// A chat message with its referenced entity resolved to raw JSON.
///
/// Unlike the gated relations elsewhere, the entity is embedded whenever
/// it resolved to something non-null; there is no loading gate and no
/// sub-presenter. Kept for compatibility with existing consumers.
#[derive(Debug, Clone)]
pub struct ChatMessageView {
    pub message: ChatMessage,
    pub entity: Option<serde_json::Value>,
}

/// DTO for creating a chat session.
#[derive(Debug, Deserialize)]
pub struct CreateChatSession {
    pub trip_id: Option<DbId>,
    pub title: Option<String>,
}

/// DTO for posting a chat message.
#[derive(Debug, Deserialize)]
pub struct CreateChatMessage {
    /// Defaults to `user` when absent.
    pub sender: Option<String>,
    pub message: String,
    pub metadata: Option<serde_json::Value>,
    pub entity_type: Option<String>,
    pub entity_id: Option<DbId>,
}

//! Notification entity model.

use serde::Serialize;
use sqlx::FromRow;
use tripline_core::types::{DbId, Timestamp};

/// A row from the `notifications` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub user_id: DbId,
    /// Event kind, e.g. `participant_joined`, `diary_commented`.
    pub kind: String,
    pub title: String,
    pub body: Option<String>,
    pub is_read: bool,
    pub read_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

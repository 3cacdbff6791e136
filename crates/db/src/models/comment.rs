//! Diary comment models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tripline_core::types::{DbId, Timestamp};

/// A row from the `diary_comments` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct DiaryComment {
    pub id: DbId,
    pub diary_id: DbId,
    pub user_id: DbId,
    pub content: String,
    pub created_at: Timestamp,
}

/// DTO for creating a diary comment.
#[derive(Debug, Deserialize)]
pub struct CreateComment {
    pub content: String,
}

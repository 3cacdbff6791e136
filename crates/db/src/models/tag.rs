//! Tag models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tripline_core::types::{DbId, Timestamp};

/// A row from the `tags` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Tag {
    pub id: DbId,
    pub name: String,
    pub color: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a tag.
#[derive(Debug, Deserialize)]
pub struct CreateTag {
    pub name: String,
    pub color: Option<String>,
}

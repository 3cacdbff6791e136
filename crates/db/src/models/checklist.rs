//! Checklist item models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tripline_core::rel::Rel;
use tripline_core::types::{DbId, Timestamp};

use crate::models::trip::Trip;

/// A row from the `checklist_items` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct ChecklistItem {
    pub id: DbId,
    pub trip_id: DbId,
    pub user_id: DbId,
    pub content: String,
    pub is_checked: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A checklist item together with the loading state of its trip relation.
#[derive(Debug, Clone)]
pub struct ChecklistItemView {
    pub item: ChecklistItem,
    pub trip: Rel<Trip>,
}

/// DTO for creating a checklist item.
#[derive(Debug, Deserialize)]
pub struct CreateChecklistItem {
    pub content: String,
}

/// DTO for updating a checklist item.
#[derive(Debug, Deserialize)]
pub struct UpdateChecklistItem {
    pub content: Option<String>,
    pub is_checked: Option<bool>,
}

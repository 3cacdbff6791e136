//! Trip diary models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tripline_core::rel::Rel;
use tripline_core::types::{DbId, Timestamp};

use crate::models::trip::Trip;
use crate::models::user::User;

/// A row from the `trip_diaries` table.
///
/// `entry_date` is stored as a full timestamp (legacy writers recorded a
/// time component); the presenter renders the date part only.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct TripDiary {
    pub id: DbId,
    pub trip_id: DbId,
    pub user_id: DbId,
    pub entry_date: Timestamp,
    pub text: String,
    pub mood: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A diary together with the loading state of its relations.
#[derive(Debug, Clone)]
pub struct TripDiaryView {
    pub diary: TripDiary,
    pub trip: Rel<Trip>,
    pub user: Rel<User>,
}

/// DTO for creating a diary entry.
#[derive(Debug, Deserialize)]
pub struct CreateDiary {
    pub entry_date: Timestamp,
    pub text: String,
    pub mood: Option<String>,
}

/// DTO for updating a diary entry.
#[derive(Debug, Deserialize)]
pub struct UpdateDiary {
    pub entry_date: Option<Timestamp>,
    pub text: Option<String>,
    pub mood: Option<String>,
}

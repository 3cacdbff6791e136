//! Itinerary entry models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tripline_core::types::{DbId, Timestamp};

/// A row from the `itinerary_entries` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct ItineraryEntry {
    pub id: DbId,
    pub trip_id: DbId,
    pub place_id: Option<DbId>,
    /// 1-based day within the trip.
    pub day_number: i32,
    /// Ordering within the day.
    pub position: i32,
    pub title: String,
    pub memo: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an itinerary entry.
#[derive(Debug, Deserialize)]
pub struct CreateItineraryEntry {
    pub place_id: Option<DbId>,
    pub day_number: i32,
    pub position: Option<i32>,
    pub title: String,
    pub memo: Option<String>,
}

/// DTO for updating an itinerary entry.
#[derive(Debug, Deserialize)]
pub struct UpdateItineraryEntry {
    pub place_id: Option<DbId>,
    pub day_number: Option<i32>,
    pub position: Option<i32>,
    pub title: Option<String>,
    pub memo: Option<String>,
}

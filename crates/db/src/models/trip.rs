//! Trip entity models and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tripline_core::types::{DbId, Timestamp};

/// A row from the `trips` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Trip {
    pub id: DbId,
    pub owner_id: DbId,
    pub title: String,
    pub destination: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a trip.
#[derive(Debug, Deserialize)]
pub struct CreateTrip {
    pub title: String,
    pub destination: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// DTO for updating a trip. All fields optional; absent fields are kept.
#[derive(Debug, Deserialize)]
pub struct UpdateTrip {
    pub title: Option<String>,
    pub destination: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

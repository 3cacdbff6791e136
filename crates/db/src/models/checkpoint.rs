//! Map checkpoint models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tripline_core::rel::Rel;
use tripline_core::types::{DbId, Timestamp};

use crate::models::place::Place;

/// A row from the `map_checkpoints` table.
///
/// Coordinates are fetched as text (NUMERIC::text); see
/// [`crate::models::place`] for the coercion contract.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct MapCheckpoint {
    pub id: DbId,
    pub trip_id: DbId,
    pub user_id: DbId,
    pub place_id: Option<DbId>,
    pub title: String,
    pub lat: String,
    pub lng: String,
    pub checked_in_at: Option<Timestamp>,
    pub note: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A checkpoint together with the loading state of its place relation.
#[derive(Debug, Clone)]
pub struct MapCheckpointView {
    pub checkpoint: MapCheckpoint,
    pub place: Rel<Place>,
}

/// DTO for creating a map checkpoint.
#[derive(Debug, Deserialize)]
pub struct CreateCheckpoint {
    pub place_id: Option<DbId>,
    pub title: String,
    pub lat: f64,
    pub lng: f64,
    pub note: Option<String>,
}

/// DTO for updating a map checkpoint.
#[derive(Debug, Deserialize)]
pub struct UpdateCheckpoint {
    pub title: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub note: Option<String>,
}

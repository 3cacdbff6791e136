//! Trip participant models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tripline_core::rel::Rel;
use tripline_core::types::{DbId, Timestamp};

use crate::models::trip::Trip;
use crate::models::user::User;

/// A row from the `trip_participants` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct TripParticipant {
    pub id: DbId,
    pub trip_id: DbId,
    pub user_id: DbId,
    pub role: String,
    pub joined_at: Timestamp,
}

/// A participant together with the loading state of its relations.
#[derive(Debug, Clone)]
pub struct TripParticipantView {
    pub participant: TripParticipant,
    pub user: Rel<User>,
    pub trip: Rel<Trip>,
}

/// DTO for adding a participant to a trip.
#[derive(Debug, Deserialize)]
pub struct AddParticipant {
    pub user_id: DbId,
    /// Defaults to `viewer` when absent.
    pub role: Option<String>,
}

/// DTO for changing a participant's role.
#[derive(Debug, Deserialize)]
pub struct UpdateParticipantRole {
    pub role: String,
}

//! Repository for the `trip_participants` table.

use std::collections::HashMap;

use sqlx::PgPool;
use tripline_core::rel::Rel;
use tripline_core::types::DbId;

use crate::models::participant::{TripParticipant, TripParticipantView};
use crate::repositories::{TripRepo, UserRepo};

/// Column list for `trip_participants` queries.
const COLUMNS: &str = "id, trip_id, user_id, role, joined_at";

/// Provides CRUD operations for trip participants.
pub struct ParticipantRepo;

impl ParticipantRepo {
    /// List a trip's participants, oldest first.
    ///
    /// `with_user` / `with_trip` drive the eager-load decision: relations
    /// are fetched in one batch here, never per row, and the views record
    /// the outcome in their [`Rel`] gates.
    pub async fn list_for_trip(
        pool: &PgPool,
        trip_id: DbId,
        with_user: bool,
        with_trip: bool,
    ) -> Result<Vec<TripParticipantView>, sqlx::Error> {
        let participants = sqlx::query_as::<_, TripParticipant>(&format!(
            "SELECT {COLUMNS} FROM trip_participants \
             WHERE trip_id = $1 \
             ORDER BY joined_at ASC"
        ))
        .bind(trip_id)
        .fetch_all(pool)
        .await?;

        let mut users = HashMap::new();
        if with_user {
            let ids: Vec<DbId> = participants.iter().map(|p| p.user_id).collect();
            for user in UserRepo::fetch_many(pool, &ids).await? {
                users.insert(user.id, user);
            }
        }

        let mut trips = HashMap::new();
        if with_trip {
            for trip in TripRepo::fetch_many(pool, &[trip_id]).await? {
                trips.insert(trip.id, trip);
            }
        }

        Ok(participants
            .into_iter()
            .map(|participant| {
                let user = if with_user {
                    Rel::Loaded(users.get(&participant.user_id).cloned())
                } else {
                    Rel::NotLoaded
                };
                let trip = if with_trip {
                    Rel::Loaded(trips.get(&participant.trip_id).cloned())
                } else {
                    Rel::NotLoaded
                };
                TripParticipantView {
                    participant,
                    user,
                    trip,
                }
            })
            .collect())
    }

    /// Add a participant to a trip.
    pub async fn add(
        pool: &PgPool,
        trip_id: DbId,
        user_id: DbId,
        role: &str,
    ) -> Result<TripParticipant, sqlx::Error> {
        sqlx::query_as::<_, TripParticipant>(&format!(
            "INSERT INTO trip_participants (trip_id, user_id, role) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        ))
        .bind(trip_id)
        .bind(user_id)
        .bind(role)
        .fetch_one(pool)
        .await
    }

    /// Change a participant's role. Returns the updated row if found.
    pub async fn update_role(
        pool: &PgPool,
        trip_id: DbId,
        user_id: DbId,
        role: &str,
    ) -> Result<Option<TripParticipant>, sqlx::Error> {
        sqlx::query_as::<_, TripParticipant>(&format!(
            "UPDATE trip_participants SET role = $3 \
             WHERE trip_id = $1 AND user_id = $2 \
             RETURNING {COLUMNS}"
        ))
        .bind(trip_id)
        .bind(user_id)
        .bind(role)
        .fetch_optional(pool)
        .await
    }

    /// Remove a participant. Returns `true` if a row was removed.
    pub async fn remove(
        pool: &PgPool,
        trip_id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM trip_participants WHERE trip_id = $1 AND user_id = $2")
                .bind(trip_id)
                .bind(user_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}

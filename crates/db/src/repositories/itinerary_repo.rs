//! Repository for the `itinerary_entries` table.

use sqlx::PgPool;
use tripline_core::types::DbId;

use crate::models::itinerary::{CreateItineraryEntry, ItineraryEntry, UpdateItineraryEntry};

/// Column list for `itinerary_entries` queries.
const COLUMNS: &str =
    "id, trip_id, place_id, day_number, position, title, memo, created_at, updated_at";

/// Provides CRUD operations for itinerary entries.
pub struct ItineraryRepo;

impl ItineraryRepo {
    /// List a trip's itinerary ordered by day, then position within the day.
    pub async fn list_for_trip(
        pool: &PgPool,
        trip_id: DbId,
    ) -> Result<Vec<ItineraryEntry>, sqlx::Error> {
        sqlx::query_as::<_, ItineraryEntry>(&format!(
            "SELECT {COLUMNS} FROM itinerary_entries \
             WHERE trip_id = $1 \
             ORDER BY day_number ASC, position ASC"
        ))
        .bind(trip_id)
        .fetch_all(pool)
        .await
    }

    /// Create an itinerary entry. When no position is given, the entry is
    /// appended to the end of its day.
    pub async fn create(
        pool: &PgPool,
        trip_id: DbId,
        input: &CreateItineraryEntry,
    ) -> Result<ItineraryEntry, sqlx::Error> {
        sqlx::query_as::<_, ItineraryEntry>(&format!(
            "INSERT INTO itinerary_entries (trip_id, place_id, day_number, position, title, memo) \
             VALUES ($1, $2, $3, \
               COALESCE($4, (SELECT COALESCE(MAX(position), 0) + 1 \
                             FROM itinerary_entries WHERE trip_id = $1 AND day_number = $3)), \
               $5, $6) \
             RETURNING {COLUMNS}"
        ))
        .bind(trip_id)
        .bind(input.place_id)
        .bind(input.day_number)
        .bind(input.position)
        .bind(&input.title)
        .bind(&input.memo)
        .fetch_one(pool)
        .await
    }

    /// Update an entry, keeping any field the input leaves unset.
    pub async fn update(
        pool: &PgPool,
        entry_id: DbId,
        input: &UpdateItineraryEntry,
    ) -> Result<Option<ItineraryEntry>, sqlx::Error> {
        sqlx::query_as::<_, ItineraryEntry>(&format!(
            "UPDATE itinerary_entries SET \
               place_id = COALESCE($2, place_id), \
               day_number = COALESCE($3, day_number), \
               position = COALESCE($4, position), \
               title = COALESCE($5, title), \
               memo = COALESCE($6, memo), \
               updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        ))
        .bind(entry_id)
        .bind(input.place_id)
        .bind(input.day_number)
        .bind(input.position)
        .bind(&input.title)
        .bind(&input.memo)
        .fetch_optional(pool)
        .await
    }

    /// Delete an entry. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, entry_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM itinerary_entries WHERE id = $1")
            .bind(entry_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// The trip an entry belongs to, if the entry exists.
    pub async fn trip_of(pool: &PgPool, entry_id: DbId) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT trip_id FROM itinerary_entries WHERE id = $1")
            .bind(entry_id)
            .fetch_optional(pool)
            .await
    }
}

//! Repository for the `trips` table.

use sqlx::PgPool;
use tripline_core::trip::ROLE_OWNER;
use tripline_core::types::DbId;

use crate::models::trip::{CreateTrip, Trip, UpdateTrip};

/// Column list for `trips` queries.
const COLUMNS: &str =
    "id, owner_id, title, destination, description, start_date, end_date, created_at, updated_at";

/// Provides CRUD operations for trips.
pub struct TripRepo;

impl TripRepo {
    /// Create a trip owned by `owner_id` and enroll the owner as a
    /// participant in the same transaction.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateTrip,
    ) -> Result<Trip, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let trip = sqlx::query_as::<_, Trip>(&format!(
            "INSERT INTO trips (owner_id, title, destination, description, start_date, end_date) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        ))
        .bind(owner_id)
        .bind(&input.title)
        .bind(&input.destination)
        .bind(&input.description)
        .bind(input.start_date)
        .bind(input.end_date)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            "INSERT INTO trip_participants (trip_id, user_id, role) \
             VALUES ($1, $2, $3)",
        )
        .bind(trip.id)
        .bind(owner_id)
        .bind(ROLE_OWNER)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(trip)
    }

    /// Fetch a single trip by ID.
    pub async fn get(pool: &PgPool, trip_id: DbId) -> Result<Option<Trip>, sqlx::Error> {
        sqlx::query_as::<_, Trip>(&format!("SELECT {COLUMNS} FROM trips WHERE id = $1"))
            .bind(trip_id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch several trips by ID, in no particular order.
    ///
    /// Used to stitch eager-loaded trip relations onto other entities.
    pub async fn fetch_many(pool: &PgPool, ids: &[DbId]) -> Result<Vec<Trip>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, Trip>(&format!("SELECT {COLUMNS} FROM trips WHERE id = ANY($1)"))
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// List trips the user participates in, most recently created first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Trip>, sqlx::Error> {
        sqlx::query_as::<_, Trip>(&format!(
            "SELECT t.{} FROM trips t \
             JOIN trip_participants p ON p.trip_id = t.id \
             WHERE p.user_id = $1 \
             ORDER BY t.created_at DESC \
             LIMIT $2 OFFSET $3",
            COLUMNS.replace(", ", ", t.")
        ))
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
    }

    /// Update a trip, keeping any field the input leaves unset.
    ///
    /// Returns the updated row, or `None` if the trip does not exist.
    pub async fn update(
        pool: &PgPool,
        trip_id: DbId,
        input: &UpdateTrip,
    ) -> Result<Option<Trip>, sqlx::Error> {
        sqlx::query_as::<_, Trip>(&format!(
            "UPDATE trips SET \
               title = COALESCE($2, title), \
               destination = COALESCE($3, destination), \
               description = COALESCE($4, description), \
               start_date = COALESCE($5, start_date), \
               end_date = COALESCE($6, end_date), \
               updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        ))
        .bind(trip_id)
        .bind(&input.title)
        .bind(&input.destination)
        .bind(&input.description)
        .bind(input.start_date)
        .bind(input.end_date)
        .fetch_optional(pool)
        .await
    }

    /// Delete a trip. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, trip_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM trips WHERE id = $1")
            .bind(trip_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// The user's participant role on a trip, or `None` if not a member.
    pub async fn role_of(
        pool: &PgPool,
        trip_id: DbId,
        user_id: DbId,
    ) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT role FROM trip_participants WHERE trip_id = $1 AND user_id = $2",
        )
        .bind(trip_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }
}

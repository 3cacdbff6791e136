//! Repository for the `map_checkpoints` table.

use std::collections::HashMap;

use sqlx::PgPool;
use tripline_core::rel::Rel;
use tripline_core::types::DbId;

use crate::models::checkpoint::{
    CreateCheckpoint, MapCheckpoint, MapCheckpointView, UpdateCheckpoint,
};
use crate::repositories::PlaceRepo;

/// Column list for `map_checkpoints` queries. Coordinates come back as
/// text so the presenter layer owns the float coercion.
const COLUMNS: &str = "id, trip_id, user_id, place_id, title, \
     lat::text AS lat, lng::text AS lng, checked_in_at, note, created_at, updated_at";

/// Provides CRUD operations for map checkpoints.
pub struct CheckpointRepo;

impl CheckpointRepo {
    /// List a trip's checkpoints, oldest first.
    ///
    /// When `with_place` is set, the place relation is fetched in one
    /// batch and recorded on each view's gate; a checkpoint whose
    /// `place_id` points at a deleted row comes back loaded-but-missing.
    pub async fn list_for_trip(
        pool: &PgPool,
        trip_id: DbId,
        with_place: bool,
    ) -> Result<Vec<MapCheckpointView>, sqlx::Error> {
        let checkpoints = sqlx::query_as::<_, MapCheckpoint>(&format!(
            "SELECT {COLUMNS} FROM map_checkpoints \
             WHERE trip_id = $1 \
             ORDER BY created_at ASC"
        ))
        .bind(trip_id)
        .fetch_all(pool)
        .await?;

        Self::attach_places(pool, checkpoints, with_place).await
    }

    /// Fetch a single checkpoint by ID.
    pub async fn get(
        pool: &PgPool,
        checkpoint_id: DbId,
        with_place: bool,
    ) -> Result<Option<MapCheckpointView>, sqlx::Error> {
        let checkpoint = sqlx::query_as::<_, MapCheckpoint>(&format!(
            "SELECT {COLUMNS} FROM map_checkpoints WHERE id = $1"
        ))
        .bind(checkpoint_id)
        .fetch_optional(pool)
        .await?;

        let Some(checkpoint) = checkpoint else {
            return Ok(None);
        };
        let mut views = Self::attach_places(pool, vec![checkpoint], with_place).await?;
        Ok(views.pop())
    }

    /// Create a checkpoint.
    pub async fn create(
        pool: &PgPool,
        trip_id: DbId,
        user_id: DbId,
        input: &CreateCheckpoint,
    ) -> Result<MapCheckpoint, sqlx::Error> {
        sqlx::query_as::<_, MapCheckpoint>(&format!(
            "INSERT INTO map_checkpoints (trip_id, user_id, place_id, title, lat, lng, note) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        ))
        .bind(trip_id)
        .bind(user_id)
        .bind(input.place_id)
        .bind(&input.title)
        .bind(input.lat)
        .bind(input.lng)
        .bind(&input.note)
        .fetch_one(pool)
        .await
    }

    /// Update a checkpoint, keeping any field the input leaves unset.
    pub async fn update(
        pool: &PgPool,
        checkpoint_id: DbId,
        input: &UpdateCheckpoint,
    ) -> Result<Option<MapCheckpoint>, sqlx::Error> {
        sqlx::query_as::<_, MapCheckpoint>(&format!(
            "UPDATE map_checkpoints SET \
               title = COALESCE($2, title), \
               lat = COALESCE($3, lat), \
               lng = COALESCE($4, lng), \
               note = COALESCE($5, note), \
               updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        ))
        .bind(checkpoint_id)
        .bind(&input.title)
        .bind(input.lat)
        .bind(input.lng)
        .bind(&input.note)
        .fetch_optional(pool)
        .await
    }

    /// Record a check-in at the current time. Returns the updated row.
    pub async fn check_in(
        pool: &PgPool,
        checkpoint_id: DbId,
    ) -> Result<Option<MapCheckpoint>, sqlx::Error> {
        sqlx::query_as::<_, MapCheckpoint>(&format!(
            "UPDATE map_checkpoints SET \
               checked_in_at = NOW(), \
               updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        ))
        .bind(checkpoint_id)
        .fetch_optional(pool)
        .await
    }

    /// Delete a checkpoint. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, checkpoint_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM map_checkpoints WHERE id = $1")
            .bind(checkpoint_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Batch-fetch place relations and wrap checkpoints into views.
    async fn attach_places(
        pool: &PgPool,
        checkpoints: Vec<MapCheckpoint>,
        with_place: bool,
    ) -> Result<Vec<MapCheckpointView>, sqlx::Error> {
        let mut places = HashMap::new();
        if with_place {
            let ids: Vec<DbId> = checkpoints.iter().filter_map(|c| c.place_id).collect();
            for place in PlaceRepo::fetch_many(pool, &ids).await? {
                places.insert(place.id, place);
            }
        }

        Ok(checkpoints
            .into_iter()
            .map(|checkpoint| {
                let place = if with_place {
                    Rel::Loaded(
                        checkpoint
                            .place_id
                            .and_then(|id| places.get(&id).cloned()),
                    )
                } else {
                    Rel::NotLoaded
                };
                MapCheckpointView { checkpoint, place }
            })
            .collect())
    }
}

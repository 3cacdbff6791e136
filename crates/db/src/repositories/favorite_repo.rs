//! Repository for the `favorites` table and its polymorphic target.

use std::collections::HashMap;

use sqlx::PgPool;
use tripline_core::favorite::{FAVORITABLE_MAP_CHECKPOINT, FAVORITABLE_PLACE, FAVORITABLE_TRIP};
use tripline_core::rel::Rel;
use tripline_core::types::DbId;

use crate::models::checkpoint::MapCheckpoint;
use crate::models::favorite::{Favorite, FavoriteView, Favoritable};
use crate::repositories::{PlaceRepo, TripRepo};

/// Column list for `favorites` queries.
const COLUMNS: &str = "id, user_id, favoritable_type, favoritable_id, created_at, updated_at";

/// Column list for resolving checkpoint targets (coordinates as text).
const CHECKPOINT_COLUMNS: &str = "id, trip_id, user_id, place_id, title, \
     lat::text AS lat, lng::text AS lng, checked_in_at, note, created_at, updated_at";

/// Provides CRUD operations for favorites.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// List a user's favorites, newest first.
    ///
    /// When `with_favoritable` is set, targets are resolved per
    /// discriminator in one batch each. A favorite whose target row was
    /// deleted, or whose discriminator this version cannot resolve, comes
    /// back loaded-but-missing so the presenter renders `null` instead of
    /// faulting.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        with_favoritable: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<FavoriteView>, sqlx::Error> {
        let favorites = sqlx::query_as::<_, Favorite>(&format!(
            "SELECT {COLUMNS} FROM favorites \
             WHERE user_id = $1 \
             ORDER BY created_at DESC NULLS LAST \
             LIMIT $2 OFFSET $3"
        ))
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        if !with_favoritable {
            return Ok(favorites
                .into_iter()
                .map(|favorite| FavoriteView {
                    favorite,
                    favoritable: Rel::NotLoaded,
                })
                .collect());
        }

        let ids_of = |discriminator: &str| -> Vec<DbId> {
            favorites
                .iter()
                .filter(|f| f.favoritable_type == discriminator)
                .map(|f| f.favoritable_id)
                .collect()
        };

        let mut places = HashMap::new();
        for place in PlaceRepo::fetch_many(pool, &ids_of(FAVORITABLE_PLACE)).await? {
            places.insert(place.id, place);
        }

        let mut trips = HashMap::new();
        for trip in TripRepo::fetch_many(pool, &ids_of(FAVORITABLE_TRIP)).await? {
            trips.insert(trip.id, trip);
        }

        let mut checkpoints = HashMap::new();
        let checkpoint_ids = ids_of(FAVORITABLE_MAP_CHECKPOINT);
        if !checkpoint_ids.is_empty() {
            let rows = sqlx::query_as::<_, MapCheckpoint>(&format!(
                "SELECT {CHECKPOINT_COLUMNS} FROM map_checkpoints WHERE id = ANY($1)"
            ))
            .bind(&checkpoint_ids)
            .fetch_all(pool)
            .await?;
            for checkpoint in rows {
                checkpoints.insert(checkpoint.id, checkpoint);
            }
        }

        Ok(favorites
            .into_iter()
            .map(|favorite| {
                let target = match favorite.favoritable_type.as_str() {
                    FAVORITABLE_PLACE => places
                        .get(&favorite.favoritable_id)
                        .cloned()
                        .map(Favoritable::Place),
                    FAVORITABLE_TRIP => trips
                        .get(&favorite.favoritable_id)
                        .cloned()
                        .map(Favoritable::Trip),
                    FAVORITABLE_MAP_CHECKPOINT => checkpoints
                        .get(&favorite.favoritable_id)
                        .cloned()
                        .map(Favoritable::MapCheckpoint),
                    _ => None,
                };
                FavoriteView {
                    favorite,
                    favoritable: Rel::Loaded(target),
                }
            })
            .collect())
    }

    /// Create a favorite.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        favoritable_type: &str,
        favoritable_id: DbId,
    ) -> Result<Favorite, sqlx::Error> {
        sqlx::query_as::<_, Favorite>(&format!(
            "INSERT INTO favorites (user_id, favoritable_type, favoritable_id, created_at, updated_at) \
             VALUES ($1, $2, $3, NOW(), NOW()) \
             RETURNING {COLUMNS}"
        ))
        .bind(user_id)
        .bind(favoritable_type)
        .bind(favoritable_id)
        .fetch_one(pool)
        .await
    }

    /// Delete a user's favorite. Returns `true` if a row was removed.
    pub async fn delete(
        pool: &PgPool,
        favorite_id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM favorites WHERE id = $1 AND user_id = $2")
            .bind(favorite_id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

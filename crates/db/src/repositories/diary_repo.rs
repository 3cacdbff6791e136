//! Repository for the `trip_diaries` table.

use std::collections::HashMap;

use sqlx::PgPool;
use tripline_core::rel::Rel;
use tripline_core::types::DbId;

use crate::models::diary::{CreateDiary, TripDiary, TripDiaryView, UpdateDiary};
use crate::repositories::{TripRepo, UserRepo};

/// Column list for `trip_diaries` queries.
const COLUMNS: &str =
    "id, trip_id, user_id, entry_date, text, mood, created_at, updated_at";

/// Provides CRUD operations for trip diaries.
pub struct DiaryRepo;

impl DiaryRepo {
    /// List a trip's diaries, newest entry first.
    pub async fn list_for_trip(
        pool: &PgPool,
        trip_id: DbId,
        with_trip: bool,
        with_user: bool,
    ) -> Result<Vec<TripDiaryView>, sqlx::Error> {
        let diaries = sqlx::query_as::<_, TripDiary>(&format!(
            "SELECT {COLUMNS} FROM trip_diaries \
             WHERE trip_id = $1 \
             ORDER BY entry_date DESC"
        ))
        .bind(trip_id)
        .fetch_all(pool)
        .await?;

        Self::attach_relations(pool, diaries, with_trip, with_user).await
    }

    /// Fetch a single diary by ID.
    pub async fn get(
        pool: &PgPool,
        diary_id: DbId,
        with_trip: bool,
        with_user: bool,
    ) -> Result<Option<TripDiaryView>, sqlx::Error> {
        let diary = sqlx::query_as::<_, TripDiary>(&format!(
            "SELECT {COLUMNS} FROM trip_diaries WHERE id = $1"
        ))
        .bind(diary_id)
        .fetch_optional(pool)
        .await?;

        let Some(diary) = diary else {
            return Ok(None);
        };
        let mut views = Self::attach_relations(pool, vec![diary], with_trip, with_user).await?;
        Ok(views.pop())
    }

    /// Create a diary entry.
    pub async fn create(
        pool: &PgPool,
        trip_id: DbId,
        user_id: DbId,
        input: &CreateDiary,
    ) -> Result<TripDiary, sqlx::Error> {
        sqlx::query_as::<_, TripDiary>(&format!(
            "INSERT INTO trip_diaries (trip_id, user_id, entry_date, text, mood) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        ))
        .bind(trip_id)
        .bind(user_id)
        .bind(input.entry_date)
        .bind(&input.text)
        .bind(&input.mood)
        .fetch_one(pool)
        .await
    }

    /// Update a diary entry, keeping any field the input leaves unset.
    pub async fn update(
        pool: &PgPool,
        diary_id: DbId,
        input: &UpdateDiary,
    ) -> Result<Option<TripDiary>, sqlx::Error> {
        sqlx::query_as::<_, TripDiary>(&format!(
            "UPDATE trip_diaries SET \
               entry_date = COALESCE($2, entry_date), \
               text = COALESCE($3, text), \
               mood = COALESCE($4, mood), \
               updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        ))
        .bind(diary_id)
        .bind(input.entry_date)
        .bind(&input.text)
        .bind(&input.mood)
        .fetch_optional(pool)
        .await
    }

    /// Delete a diary entry. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, diary_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM trip_diaries WHERE id = $1")
            .bind(diary_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Batch-fetch trip/user relations and wrap diaries into views.
    async fn attach_relations(
        pool: &PgPool,
        diaries: Vec<TripDiary>,
        with_trip: bool,
        with_user: bool,
    ) -> Result<Vec<TripDiaryView>, sqlx::Error> {
        let mut trips = HashMap::new();
        if with_trip {
            let ids: Vec<DbId> = diaries.iter().map(|d| d.trip_id).collect();
            for trip in TripRepo::fetch_many(pool, &ids).await? {
                trips.insert(trip.id, trip);
            }
        }

        let mut users = HashMap::new();
        if with_user {
            let ids: Vec<DbId> = diaries.iter().map(|d| d.user_id).collect();
            for user in UserRepo::fetch_many(pool, &ids).await? {
                users.insert(user.id, user);
            }
        }

        Ok(diaries
            .into_iter()
            .map(|diary| {
                let trip = if with_trip {
                    Rel::Loaded(trips.get(&diary.trip_id).cloned())
                } else {
                    Rel::NotLoaded
                };
                let user = if with_user {
                    Rel::Loaded(users.get(&diary.user_id).cloned())
                } else {
                    Rel::NotLoaded
                };
                TripDiaryView { diary, trip, user }
            })
            .collect())
    }
}

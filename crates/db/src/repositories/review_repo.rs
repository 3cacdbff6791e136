//! Repository for the `reviews` table.

use sqlx::PgPool;
use tripline_core::types::DbId;

use crate::models::review::{CreateReview, Review, UpdateReview};

/// Column list for `reviews` queries.
const COLUMNS: &str = "id, place_id, user_id, rating, content, created_at, updated_at";

/// Provides CRUD operations for place reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// List a place's reviews, newest first.
    pub async fn list_for_place(
        pool: &PgPool,
        place_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Review>, sqlx::Error> {
        sqlx::query_as::<_, Review>(&format!(
            "SELECT {COLUMNS} FROM reviews \
             WHERE place_id = $1 \
             ORDER BY created_at DESC \
             LIMIT $2 OFFSET $3"
        ))
        .bind(place_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
    }

    /// Create a review.
    pub async fn create(
        pool: &PgPool,
        place_id: DbId,
        user_id: DbId,
        input: &CreateReview,
    ) -> Result<Review, sqlx::Error> {
        sqlx::query_as::<_, Review>(&format!(
            "INSERT INTO reviews (place_id, user_id, rating, content) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        ))
        .bind(place_id)
        .bind(user_id)
        .bind(input.rating)
        .bind(&input.content)
        .fetch_one(pool)
        .await
    }

    /// Update a user's review, keeping any field the input leaves unset.
    pub async fn update(
        pool: &PgPool,
        review_id: DbId,
        user_id: DbId,
        input: &UpdateReview,
    ) -> Result<Option<Review>, sqlx::Error> {
        sqlx::query_as::<_, Review>(&format!(
            "UPDATE reviews SET \
               rating = COALESCE($3, rating), \
               content = COALESCE($4, content), \
               updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {COLUMNS}"
        ))
        .bind(review_id)
        .bind(user_id)
        .bind(input.rating)
        .bind(&input.content)
        .fetch_optional(pool)
        .await
    }

    /// Delete a user's review. Returns `true` if a row was removed.
    pub async fn delete(
        pool: &PgPool,
        review_id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1 AND user_id = $2")
            .bind(review_id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

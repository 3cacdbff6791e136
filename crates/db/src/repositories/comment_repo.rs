//! Repository for the `diary_comments` table.

use sqlx::PgPool;
use tripline_core::types::DbId;

use crate::models::comment::DiaryComment;

/// Column list for `diary_comments` queries.
const COLUMNS: &str = "id, diary_id, user_id, content, created_at";

/// Provides CRUD operations for diary comments.
pub struct CommentRepo;

impl CommentRepo {
    /// List a diary's comments, oldest first.
    pub async fn list_for_diary(
        pool: &PgPool,
        diary_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<DiaryComment>, sqlx::Error> {
        sqlx::query_as::<_, DiaryComment>(&format!(
            "SELECT {COLUMNS} FROM diary_comments \
             WHERE diary_id = $1 \
             ORDER BY created_at ASC \
             LIMIT $2 OFFSET $3"
        ))
        .bind(diary_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
    }

    /// Create a comment.
    pub async fn create(
        pool: &PgPool,
        diary_id: DbId,
        user_id: DbId,
        content: &str,
    ) -> Result<DiaryComment, sqlx::Error> {
        sqlx::query_as::<_, DiaryComment>(&format!(
            "INSERT INTO diary_comments (diary_id, user_id, content) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        ))
        .bind(diary_id)
        .bind(user_id)
        .bind(content)
        .fetch_one(pool)
        .await
    }

    /// Delete a user's comment. Returns `true` if a row was removed.
    pub async fn delete(
        pool: &PgPool,
        comment_id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM diary_comments WHERE id = $1 AND user_id = $2")
            .bind(comment_id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

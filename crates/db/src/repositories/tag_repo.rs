//! Repository for tags and the trip/tag join table.

use sqlx::PgPool;
use tripline_core::types::DbId;

use crate::models::tag::Tag;

/// Column list for `tags` queries.
const COLUMNS: &str = "id, name, color, created_at";

/// Provides CRUD operations for tags and trip tagging.
pub struct TagRepo;

impl TagRepo {
    /// List all tags alphabetically.
    pub async fn list(pool: &PgPool) -> Result<Vec<Tag>, sqlx::Error> {
        sqlx::query_as::<_, Tag>(&format!("SELECT {COLUMNS} FROM tags ORDER BY name ASC"))
            .fetch_all(pool)
            .await
    }

    /// Create a tag.
    pub async fn create(
        pool: &PgPool,
        name: &str,
        color: Option<&str>,
    ) -> Result<Tag, sqlx::Error> {
        sqlx::query_as::<_, Tag>(&format!(
            "INSERT INTO tags (name, color) VALUES ($1, $2) RETURNING {COLUMNS}"
        ))
        .bind(name)
        .bind(color)
        .fetch_one(pool)
        .await
    }

    /// List the tags attached to a trip.
    pub async fn list_for_trip(pool: &PgPool, trip_id: DbId) -> Result<Vec<Tag>, sqlx::Error> {
        sqlx::query_as::<_, Tag>(
            "SELECT t.id, t.name, t.color, t.created_at FROM tags t \
             JOIN trip_tags tt ON tt.tag_id = t.id \
             WHERE tt.trip_id = $1 \
             ORDER BY t.name ASC",
        )
        .bind(trip_id)
        .fetch_all(pool)
        .await
    }

    /// Attach a tag to a trip. Attaching twice is a no-op.
    pub async fn attach(pool: &PgPool, trip_id: DbId, tag_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO trip_tags (trip_id, tag_id) VALUES ($1, $2) \
             ON CONFLICT DO NOTHING",
        )
        .bind(trip_id)
        .bind(tag_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Detach a tag from a trip. Returns `true` if a row was removed.
    pub async fn detach(pool: &PgPool, trip_id: DbId, tag_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM trip_tags WHERE trip_id = $1 AND tag_id = $2")
            .bind(trip_id)
            .bind(tag_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Repository for the `checklist_items` table.

use sqlx::PgPool;
use tripline_core::rel::Rel;
use tripline_core::types::DbId;

use crate::models::checklist::{ChecklistItem, ChecklistItemView, UpdateChecklistItem};
use crate::repositories::TripRepo;

/// Column list for `checklist_items` queries.
const COLUMNS: &str = "id, trip_id, user_id, content, is_checked, created_at, updated_at";

/// Provides CRUD operations for checklist items.
pub struct ChecklistRepo;

impl ChecklistRepo {
    /// List a trip's checklist, oldest first.
    ///
    /// The checklist contract always carries a `trip` key downstream, so
    /// the caller chooses whether to pay for the trip fetch; when it
    /// declines, the views are gated `NotLoaded` and the presenter emits
    /// the degraded placeholder.
    pub async fn list_for_trip(
        pool: &PgPool,
        trip_id: DbId,
        with_trip: bool,
    ) -> Result<Vec<ChecklistItemView>, sqlx::Error> {
        let items = sqlx::query_as::<_, ChecklistItem>(&format!(
            "SELECT {COLUMNS} FROM checklist_items \
             WHERE trip_id = $1 \
             ORDER BY created_at ASC"
        ))
        .bind(trip_id)
        .fetch_all(pool)
        .await?;

        let trip = if with_trip {
            Rel::Loaded(TripRepo::get(pool, trip_id).await?)
        } else {
            Rel::NotLoaded
        };

        Ok(items
            .into_iter()
            .map(|item| ChecklistItemView {
                item,
                trip: trip.clone(),
            })
            .collect())
    }

    /// Fetch a single checklist item by ID.
    pub async fn get(pool: &PgPool, item_id: DbId) -> Result<Option<ChecklistItem>, sqlx::Error> {
        sqlx::query_as::<_, ChecklistItem>(&format!(
            "SELECT {COLUMNS} FROM checklist_items WHERE id = $1"
        ))
        .bind(item_id)
        .fetch_optional(pool)
        .await
    }

    /// Create a checklist item.
    pub async fn create(
        pool: &PgPool,
        trip_id: DbId,
        user_id: DbId,
        content: &str,
    ) -> Result<ChecklistItem, sqlx::Error> {
        sqlx::query_as::<_, ChecklistItem>(&format!(
            "INSERT INTO checklist_items (trip_id, user_id, content) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        ))
        .bind(trip_id)
        .bind(user_id)
        .bind(content)
        .fetch_one(pool)
        .await
    }

    /// Update a checklist item, keeping any field the input leaves unset.
    pub async fn update(
        pool: &PgPool,
        item_id: DbId,
        input: &UpdateChecklistItem,
    ) -> Result<Option<ChecklistItem>, sqlx::Error> {
        sqlx::query_as::<_, ChecklistItem>(&format!(
            "UPDATE checklist_items SET \
               content = COALESCE($2, content), \
               is_checked = COALESCE($3, is_checked), \
               updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        ))
        .bind(item_id)
        .bind(&input.content)
        .bind(input.is_checked)
        .fetch_optional(pool)
        .await
    }

    /// Flip an item's checked flag. Returns the updated row if found.
    pub async fn toggle(
        pool: &PgPool,
        item_id: DbId,
    ) -> Result<Option<ChecklistItem>, sqlx::Error> {
        sqlx::query_as::<_, ChecklistItem>(&format!(
            "UPDATE checklist_items SET \
               is_checked = NOT is_checked, \
               updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        ))
        .bind(item_id)
        .fetch_optional(pool)
        .await
    }

    /// Delete a checklist item. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, item_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM checklist_items WHERE id = $1")
            .bind(item_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

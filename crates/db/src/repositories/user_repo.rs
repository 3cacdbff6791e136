//! Repository for the `users` table.

use sqlx::PgPool;
use tripline_core::types::DbId;

use crate::models::user::User;

/// Column list for `users` queries.
const COLUMNS: &str = "id, email, display_name, avatar_url, created_at, updated_at";

/// Read-only access to user rows (account management is external).
pub struct UserRepo;

impl UserRepo {
    /// Fetch a single user by ID.
    pub async fn get(pool: &PgPool, user_id: DbId) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(&format!("SELECT {COLUMNS} FROM users WHERE id = $1"))
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch several users by ID, in no particular order.
    ///
    /// Used to stitch eager-loaded user relations onto other entities.
    pub async fn fetch_many(pool: &PgPool, ids: &[DbId]) -> Result<Vec<User>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, User>(&format!("SELECT {COLUMNS} FROM users WHERE id = ANY($1)"))
            .bind(ids)
            .fetch_all(pool)
            .await
    }
}

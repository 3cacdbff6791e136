//! Trip-level authorization helpers shared by handlers.

use sqlx::PgPool;
use tripline_core::error::CoreError;
use tripline_core::trip::{ROLE_EDITOR, ROLE_OWNER};
use tripline_core::types::DbId;
use tripline_db::repositories::TripRepo;

use crate::error::{AppError, AppResult};

/// Require that the user participates in the trip; returns their role.
///
/// A non-member gets 404 rather than 403 so trip IDs are not probeable.
pub async fn require_member(pool: &PgPool, trip_id: DbId, user_id: DbId) -> AppResult<String> {
    TripRepo::role_of(pool, trip_id, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Trip",
            id: trip_id,
        }))
}

/// Require that the user can edit trip content (owner or editor).
pub async fn require_editor(pool: &PgPool, trip_id: DbId, user_id: DbId) -> AppResult<String> {
    let role = require_member(pool, trip_id, user_id).await?;
    if role == ROLE_OWNER || role == ROLE_EDITOR {
        Ok(role)
    } else {
        Err(AppError::Core(CoreError::Forbidden(
            "Viewer role cannot modify trip content".into(),
        )))
    }
}

/// Require that the user owns the trip.
pub async fn require_owner(pool: &PgPool, trip_id: DbId, user_id: DbId) -> AppResult<()> {
    let role = require_member(pool, trip_id, user_id).await?;
    if role == ROLE_OWNER {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Forbidden(
            "Only the trip owner may do this".into(),
        )))
    }
}

//! Handler for top-level comment deletion.
//!
//! Listing and creating comments live under the diary routes; deletion
//! addresses the comment directly.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tripline_core::error::CoreError;
use tripline_core::types::DbId;
use tripline_db::repositories::CommentRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// DELETE /api/v1/comments/{id}
///
/// Comments may only be removed by their author; deleting someone
/// else's comment reads as not-found.
pub async fn delete_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(comment_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !CommentRepo::delete(&state.pool, comment_id, auth.user_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "DiaryComment",
            id: comment_id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

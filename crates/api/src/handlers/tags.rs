//! Handlers for tags and trip tagging.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tripline_core::error::CoreError;
use tripline_core::types::DbId;
use tripline_db::models::tag::CreateTag;
use tripline_db::repositories::TagRepo;

use crate::access::{require_editor, require_member};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/tags
pub async fn list_tags(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let tags = TagRepo::list(&state.pool).await?;
    Ok(Json(serde_json::json!({ "data": tags })))
}

/// POST /api/v1/tags
///
/// Tag names are globally unique; a duplicate surfaces as 409 via the
/// `uq_tags_name` constraint.
pub async fn create_tag(
    _auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateTag>,
) -> AppResult<impl IntoResponse> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Tag name must not be empty".into(),
        )));
    }

    let tag = TagRepo::create(&state.pool, name, input.color.as_deref()).await?;
    Ok((StatusCode::CREATED, Json(serde_json::json!({ "data": tag }))))
}

/// GET /api/v1/trips/{id}/tags
pub async fn list_trip_tags(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    require_member(&state.pool, trip_id, auth.user_id).await?;
    let tags = TagRepo::list_for_trip(&state.pool, trip_id).await?;
    Ok(Json(serde_json::json!({ "data": tags })))
}

/// POST /api/v1/trips/{id}/tags/{tag_id}
///
/// Attach a tag to a trip. Idempotent.
pub async fn attach_tag(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((trip_id, tag_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    require_editor(&state.pool, trip_id, auth.user_id).await?;
    TagRepo::attach(&state.pool, trip_id, tag_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/trips/{id}/tags/{tag_id}
pub async fn detach_tag(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((trip_id, tag_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    require_editor(&state.pool, trip_id, auth.user_id).await?;
    if !TagRepo::detach(&state.pool, trip_id, tag_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Tag",
            id: tag_id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

//! Handlers for the authenticated user's favorites.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use tripline_core::error::CoreError;
use tripline_core::favorite::{is_known, KNOWN_FAVORITABLE_TYPES};
use tripline_core::rel::Rel;
use tripline_core::types::DbId;
use tripline_db::models::favorite::{CreateFavorite, FavoriteView};
use tripline_db::repositories::FavoriteRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::Page;
use crate::middleware::auth::AuthUser;
use crate::presenters::favorite;
use crate::state::AppState;

/// Query parameters for favorite listing.
///
/// Pagination fields are inlined rather than flattened: serde's flatten
/// buffers values as strings, which breaks integer query parameters.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Eagerly resolve each favorite's polymorphic target.
    pub with_favoritable: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ListQuery {
    fn page(&self) -> Page {
        Page {
            limit: self.limit,
            offset: self.offset,
        }
    }
}

/// GET /api/v1/favorites
pub async fn list_favorites(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let views = FavoriteRepo::list_for_user(
        &state.pool,
        auth.user_id,
        params.with_favoritable.unwrap_or(false),
        params.page().limit(),
        params.page().offset(),
    )
    .await?;

    let shaped = views
        .iter()
        .map(favorite::present)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(serde_json::json!({ "data": shaped })))
}

/// POST /api/v1/favorites
///
/// Creating the same favorite twice surfaces as 409 via the
/// `uq_favorites_user_target` constraint.
pub async fn create_favorite(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateFavorite>,
) -> AppResult<impl IntoResponse> {
    if !is_known(&input.favoritable_type) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown favoritable type '{}'; expected one of {:?}",
            input.favoritable_type, KNOWN_FAVORITABLE_TYPES
        ))));
    }

    let created = FavoriteRepo::create(
        &state.pool,
        auth.user_id,
        &input.favoritable_type,
        input.favoritable_id,
    )
    .await?;
    let shaped = favorite::present(&FavoriteView {
        favorite: created,
        favoritable: Rel::NotLoaded,
    })?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "data": shaped })),
    ))
}

/// DELETE /api/v1/favorites/{id}
pub async fn delete_favorite(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(favorite_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !FavoriteRepo::delete(&state.pool, favorite_id, auth.user_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Favorite",
            id: favorite_id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

//! Handlers for place reviews.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tripline_core::error::CoreError;
use tripline_core::review::{validate_content, validate_rating};
use tripline_core::types::DbId;
use tripline_db::models::review::{CreateReview, UpdateReview};
use tripline_db::repositories::{PlaceRepo, ReviewRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::Page;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/places/{id}/reviews
pub async fn list_reviews(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(place_id): Path<DbId>,
    Query(page): Query<Page>,
) -> AppResult<Json<serde_json::Value>> {
    ensure_place(&state, place_id).await?;
    let reviews =
        ReviewRepo::list_for_place(&state.pool, place_id, page.limit(), page.offset()).await?;
    Ok(Json(serde_json::json!({ "data": reviews })))
}

/// POST /api/v1/places/{id}/reviews
///
/// One review per user per place; a duplicate surfaces as 409 via the
/// `uq_reviews_place_user` constraint.
pub async fn create_review(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(place_id): Path<DbId>,
    Json(input): Json<CreateReview>,
) -> AppResult<impl IntoResponse> {
    ensure_place(&state, place_id).await?;
    validate_rating(input.rating)?;
    if let Some(content) = &input.content {
        validate_content(content)?;
    }

    let review = ReviewRepo::create(&state.pool, place_id, auth.user_id, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "data": review })),
    ))
}

/// PUT /api/v1/reviews/{id}
///
/// Scoped to the author; editing someone else's review reads as
/// not-found.
pub async fn update_review(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(review_id): Path<DbId>,
    Json(input): Json<UpdateReview>,
) -> AppResult<Json<serde_json::Value>> {
    if let Some(rating) = input.rating {
        validate_rating(rating)?;
    }
    if let Some(content) = &input.content {
        validate_content(content)?;
    }

    let review = ReviewRepo::update(&state.pool, review_id, auth.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Review",
            id: review_id,
        }))?;
    Ok(Json(serde_json::json!({ "data": review })))
}

/// DELETE /api/v1/reviews/{id}
pub async fn delete_review(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(review_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !ReviewRepo::delete(&state.pool, review_id, auth.user_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Review",
            id: review_id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn ensure_place(state: &AppState, place_id: DbId) -> AppResult<()> {
    if PlaceRepo::get(&state.pool, place_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Place",
            id: place_id,
        }));
    }
    Ok(())
}

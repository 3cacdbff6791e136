//! Handlers for trip diaries and their comments.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use tripline_core::diary::{validate_mood, validate_text};
use tripline_core::error::CoreError;
use tripline_core::rel::Rel;
use tripline_core::types::DbId;
use tripline_db::models::comment::CreateComment;
use tripline_db::models::diary::{CreateDiary, TripDiaryView, UpdateDiary};
use tripline_db::repositories::{CommentRepo, DiaryRepo};

use crate::access::require_member;
use crate::error::{AppError, AppResult};
use crate::handlers::Page;
use crate::middleware::auth::AuthUser;
use crate::presenters::trip_diary;
use crate::state::AppState;

/// Query parameters for diary listing.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub with_trip: Option<bool>,
    pub with_user: Option<bool>,
}

/// GET /api/v1/trips/{id}/diaries
pub async fn list_diaries(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
    Query(params): Query<ListQuery>,
) -> AppResult<Json<serde_json::Value>> {
    require_member(&state.pool, trip_id, auth.user_id).await?;

    let views = DiaryRepo::list_for_trip(
        &state.pool,
        trip_id,
        params.with_trip.unwrap_or(false),
        params.with_user.unwrap_or(false),
    )
    .await?;
    let shaped: Vec<_> = views.iter().map(trip_diary::present).collect();
    Ok(Json(serde_json::json!({ "data": shaped })))
}

/// POST /api/v1/trips/{id}/diaries
///
/// Any trip member may write a diary entry, not just editors.
pub async fn create_diary(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
    Json(input): Json<CreateDiary>,
) -> AppResult<impl IntoResponse> {
    require_member(&state.pool, trip_id, auth.user_id).await?;
    validate_text(&input.text)?;
    if let Some(mood) = &input.mood {
        validate_mood(mood)?;
    }

    let diary = DiaryRepo::create(&state.pool, trip_id, auth.user_id, &input).await?;
    let shaped = trip_diary::present(&TripDiaryView {
        diary,
        trip: Rel::NotLoaded,
        user: Rel::NotLoaded,
    });
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "data": shaped })),
    ))
}

/// GET /api/v1/diaries/{id}
pub async fn get_diary(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(diary_id): Path<DbId>,
    Query(params): Query<ListQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let view = DiaryRepo::get(
        &state.pool,
        diary_id,
        params.with_trip.unwrap_or(false),
        params.with_user.unwrap_or(false),
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "TripDiary",
        id: diary_id,
    }))?;
    require_member(&state.pool, view.diary.trip_id, auth.user_id).await?;

    let shaped = trip_diary::present(&view);
    Ok(Json(serde_json::json!({ "data": shaped })))
}

/// PUT /api/v1/diaries/{id}
///
/// Only the diary's author may edit it.
pub async fn update_diary(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(diary_id): Path<DbId>,
    Json(input): Json<UpdateDiary>,
) -> AppResult<Json<serde_json::Value>> {
    let existing = fetch(&state, diary_id).await?;
    require_author(&existing, auth.user_id)?;
    if let Some(text) = &input.text {
        validate_text(text)?;
    }
    if let Some(mood) = &input.mood {
        validate_mood(mood)?;
    }

    let diary = DiaryRepo::update(&state.pool, diary_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TripDiary",
            id: diary_id,
        }))?;
    let shaped = trip_diary::present(&TripDiaryView {
        diary,
        trip: Rel::NotLoaded,
        user: Rel::NotLoaded,
    });
    Ok(Json(serde_json::json!({ "data": shaped })))
}

/// DELETE /api/v1/diaries/{id}
pub async fn delete_diary(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(diary_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let existing = fetch(&state, diary_id).await?;
    require_author(&existing, auth.user_id)?;

    DiaryRepo::delete(&state.pool, diary_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/diaries/{id}/comments
pub async fn list_comments(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(diary_id): Path<DbId>,
    Query(page): Query<Page>,
) -> AppResult<Json<serde_json::Value>> {
    let diary = fetch(&state, diary_id).await?;
    require_member(&state.pool, diary.diary.trip_id, auth.user_id).await?;

    let comments =
        CommentRepo::list_for_diary(&state.pool, diary_id, page.limit(), page.offset()).await?;
    Ok(Json(serde_json::json!({ "data": comments })))
}

/// POST /api/v1/diaries/{id}/comments
pub async fn create_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(diary_id): Path<DbId>,
    Json(input): Json<CreateComment>,
) -> AppResult<impl IntoResponse> {
    let diary = fetch(&state, diary_id).await?;
    require_member(&state.pool, diary.diary.trip_id, auth.user_id).await?;
    if input.content.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Comment content must not be empty".into(),
        )));
    }

    let comment = CommentRepo::create(&state.pool, diary_id, auth.user_id, &input.content).await?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "data": comment })),
    ))
}

fn require_author(view: &TripDiaryView, user_id: DbId) -> Result<(), AppError> {
    if view.diary.user_id != user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the diary author may modify this entry".into(),
        )));
    }
    Ok(())
}

async fn fetch(state: &AppState, diary_id: DbId) -> AppResult<TripDiaryView> {
    DiaryRepo::get(&state.pool, diary_id, false, false)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TripDiary",
            id: diary_id,
        }))
}

//! Handlers for trip itineraries.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tripline_core::error::CoreError;
use tripline_core::types::DbId;
use tripline_db::models::itinerary::{CreateItineraryEntry, UpdateItineraryEntry};
use tripline_db::repositories::ItineraryRepo;

use crate::access::{require_editor, require_member};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/trips/{id}/itinerary
pub async fn list_entries(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    require_member(&state.pool, trip_id, auth.user_id).await?;
    let entries = ItineraryRepo::list_for_trip(&state.pool, trip_id).await?;
    Ok(Json(serde_json::json!({ "data": entries })))
}

/// POST /api/v1/trips/{id}/itinerary
pub async fn create_entry(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
    Json(input): Json<CreateItineraryEntry>,
) -> AppResult<impl IntoResponse> {
    require_editor(&state.pool, trip_id, auth.user_id).await?;
    validate_entry(&input.title, input.day_number, input.position)?;

    let entry = ItineraryRepo::create(&state.pool, trip_id, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "data": entry })),
    ))
}

/// PUT /api/v1/itinerary/{id}
pub async fn update_entry(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(entry_id): Path<DbId>,
    Json(input): Json<UpdateItineraryEntry>,
) -> AppResult<Json<serde_json::Value>> {
    let trip_id = trip_of(&state, entry_id).await?;
    require_editor(&state.pool, trip_id, auth.user_id).await?;
    if let Some(title) = &input.title {
        validate_entry(title, input.day_number.unwrap_or(1), input.position)?;
    } else if let Some(day) = input.day_number {
        validate_day(day)?;
    }

    let entry = ItineraryRepo::update(&state.pool, entry_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ItineraryEntry",
            id: entry_id,
        }))?;
    Ok(Json(serde_json::json!({ "data": entry })))
}

/// DELETE /api/v1/itinerary/{id}
pub async fn delete_entry(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(entry_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let trip_id = trip_of(&state, entry_id).await?;
    require_editor(&state.pool, trip_id, auth.user_id).await?;

    ItineraryRepo::delete(&state.pool, entry_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn validate_entry(title: &str, day_number: i32, position: Option<i32>) -> Result<(), AppError> {
    if title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Itinerary entry title must not be empty".into(),
        )));
    }
    validate_day(day_number)?;
    if let Some(position) = position {
        if position < 1 {
            return Err(AppError::Core(CoreError::Validation(
                "Position must be at least 1".into(),
            )));
        }
    }
    Ok(())
}

fn validate_day(day_number: i32) -> Result<(), AppError> {
    if day_number < 1 {
        return Err(AppError::Core(CoreError::Validation(
            "Day number must be at least 1".into(),
        )));
    }
    Ok(())
}

async fn trip_of(state: &AppState, entry_id: DbId) -> AppResult<DbId> {
    ItineraryRepo::trip_of(&state.pool, entry_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ItineraryEntry",
            id: entry_id,
        }))
}

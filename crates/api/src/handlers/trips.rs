//! Handlers for the `/trips` resource.
//!
//! All endpoints require authentication via [`AuthUser`].

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tripline_core::error::CoreError;
use tripline_core::trip::validate_title;
use tripline_core::types::DbId;
use tripline_db::models::trip::{CreateTrip, UpdateTrip};
use tripline_db::repositories::TripRepo;

use crate::access::{require_editor, require_member, require_owner};
use crate::error::{AppError, AppResult};
use crate::handlers::Page;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/trips
///
/// List the trips the authenticated user participates in.
pub async fn list_trips(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(page): Query<Page>,
) -> AppResult<Json<serde_json::Value>> {
    let trips =
        TripRepo::list_for_user(&state.pool, auth.user_id, page.limit(), page.offset()).await?;
    Ok(Json(serde_json::json!({ "data": trips })))
}

/// POST /api/v1/trips
///
/// Create a trip owned by the authenticated user.
pub async fn create_trip(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateTrip>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.title)?;
    if input.end_date < input.start_date {
        return Err(AppError::Core(CoreError::Validation(
            "Trip end date must not precede its start date".into(),
        )));
    }

    let trip = TripRepo::create(&state.pool, auth.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(trip))))
}

/// GET /api/v1/trips/{id}
pub async fn get_trip(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    require_member(&state.pool, trip_id, auth.user_id).await?;
    let trip = TripRepo::get(&state.pool, trip_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Trip",
            id: trip_id,
        }))?;
    Ok(Json(serde_json::json!({ "data": trip })))
}

/// PUT /api/v1/trips/{id}
///
/// Update a trip. Requires the owner or editor role.
pub async fn update_trip(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
    Json(input): Json<UpdateTrip>,
) -> AppResult<Json<serde_json::Value>> {
    require_editor(&state.pool, trip_id, auth.user_id).await?;
    if let Some(title) = &input.title {
        validate_title(title)?;
    }

    let trip = TripRepo::update(&state.pool, trip_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Trip",
            id: trip_id,
        }))?;
    Ok(Json(serde_json::json!({ "data": trip })))
}

/// DELETE /api/v1/trips/{id}
///
/// Delete a trip. Owner only. Returns 204 No Content.
pub async fn delete_trip(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    require_owner(&state.pool, trip_id, auth.user_id).await?;

    if !TripRepo::delete(&state.pool, trip_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Trip",
            id: trip_id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

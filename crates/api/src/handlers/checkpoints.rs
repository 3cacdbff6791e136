//! Handlers for trip map checkpoints, including check-in and the
//! nearby proximity search.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use tripline_core::error::CoreError;
use tripline_core::geo::haversine_m;
use tripline_core::types::DbId;
use tripline_db::models::checkpoint::{CreateCheckpoint, MapCheckpointView, UpdateCheckpoint};
use tripline_db::repositories::CheckpointRepo;

use crate::access::{require_editor, require_member};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::presenters::{coerce_coord, map_checkpoint};
use crate::state::AppState;

/// Query parameters for checkpoint listing.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Eagerly load each checkpoint's place relation.
    pub with_place: Option<bool>,
}

/// Query parameters for the nearby search.
#[derive(Debug, Deserialize)]
pub struct NearbyQuery {
    pub lat: f64,
    pub lng: f64,
    /// Search radius in meters. Defaults to 500.
    pub radius_m: Option<f64>,
    pub with_place: Option<bool>,
}

/// GET /api/v1/trips/{id}/checkpoints
pub async fn list_checkpoints(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
    Query(params): Query<ListQuery>,
) -> AppResult<Json<serde_json::Value>> {
    require_member(&state.pool, trip_id, auth.user_id).await?;

    let views = CheckpointRepo::list_for_trip(
        &state.pool,
        trip_id,
        params.with_place.unwrap_or(false),
    )
    .await?;
    let shaped = present_all(&views)?;
    Ok(Json(serde_json::json!({ "data": shaped })))
}

/// GET /api/v1/trips/{id}/checkpoints/nearby
///
/// Returns the trip's checkpoints within `radius_m` meters of the
/// given point, closest first. The distance filter runs in-process
/// over the trip's checkpoints; trips hold at most a few dozen.
pub async fn nearby_checkpoints(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
    Query(params): Query<NearbyQuery>,
) -> AppResult<Json<serde_json::Value>> {
    require_member(&state.pool, trip_id, auth.user_id).await?;
    let radius_m = params.radius_m.unwrap_or(500.0);
    if !(radius_m > 0.0) {
        return Err(AppError::Core(CoreError::Validation(
            "Search radius must be positive".into(),
        )));
    }

    let views = CheckpointRepo::list_for_trip(
        &state.pool,
        trip_id,
        params.with_place.unwrap_or(false),
    )
    .await?;

    let mut hits = Vec::new();
    for view in &views {
        let lat = coerce_coord(&view.checkpoint.lat, "lat")?;
        let lng = coerce_coord(&view.checkpoint.lng, "lng")?;
        let distance_m = haversine_m(params.lat, params.lng, lat, lng);
        if distance_m <= radius_m {
            let mut shaped = map_checkpoint::present(view)?;
            shaped.insert("distance_m".into(), serde_json::json!(distance_m.round()));
            hits.push((distance_m, shaped));
        }
    }
    hits.sort_by(|a, b| a.0.total_cmp(&b.0));
    let shaped: Vec<_> = hits.into_iter().map(|(_, s)| s).collect();
    Ok(Json(serde_json::json!({ "data": shaped })))
}

/// POST /api/v1/trips/{id}/checkpoints
pub async fn create_checkpoint(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
    Json(input): Json<CreateCheckpoint>,
) -> AppResult<impl IntoResponse> {
    require_editor(&state.pool, trip_id, auth.user_id).await?;
    validate_coords(input.lat, input.lng)?;
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Checkpoint title must not be empty".into(),
        )));
    }

    let checkpoint = CheckpointRepo::create(&state.pool, trip_id, auth.user_id, &input).await?;
    let shaped = map_checkpoint::present(&MapCheckpointView {
        checkpoint,
        place: tripline_core::rel::Rel::NotLoaded,
    })?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "data": shaped })),
    ))
}

/// GET /api/v1/checkpoints/{id}
pub async fn get_checkpoint(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(checkpoint_id): Path<DbId>,
    Query(params): Query<ListQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let view = CheckpointRepo::get(
        &state.pool,
        checkpoint_id,
        params.with_place.unwrap_or(false),
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "MapCheckpoint",
        id: checkpoint_id,
    }))?;
    require_member(&state.pool, view.checkpoint.trip_id, auth.user_id).await?;

    let shaped = map_checkpoint::present(&view)?;
    Ok(Json(serde_json::json!({ "data": shaped })))
}

/// PUT /api/v1/checkpoints/{id}
pub async fn update_checkpoint(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(checkpoint_id): Path<DbId>,
    Json(input): Json<UpdateCheckpoint>,
) -> AppResult<Json<serde_json::Value>> {
    let existing = fetch(&state, checkpoint_id).await?;
    require_editor(&state.pool, existing.checkpoint.trip_id, auth.user_id).await?;
    if let (Some(lat), Some(lng)) = (input.lat, input.lng) {
        validate_coords(lat, lng)?;
    }

    let checkpoint = CheckpointRepo::update(&state.pool, checkpoint_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MapCheckpoint",
            id: checkpoint_id,
        }))?;
    let shaped = map_checkpoint::present(&MapCheckpointView {
        checkpoint,
        place: tripline_core::rel::Rel::NotLoaded,
    })?;
    Ok(Json(serde_json::json!({ "data": shaped })))
}

/// POST /api/v1/checkpoints/{id}/check-in
///
/// Stamps the checkpoint with the current time. Re-checking-in is
/// allowed and simply moves the stamp forward.
pub async fn check_in(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(checkpoint_id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let existing = fetch(&state, checkpoint_id).await?;
    require_member(&state.pool, existing.checkpoint.trip_id, auth.user_id).await?;

    let checkpoint = CheckpointRepo::check_in(&state.pool, checkpoint_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MapCheckpoint",
            id: checkpoint_id,
        }))?;
    let shaped = map_checkpoint::present(&MapCheckpointView {
        checkpoint,
        place: tripline_core::rel::Rel::NotLoaded,
    })?;
    Ok(Json(serde_json::json!({ "data": shaped })))
}

/// DELETE /api/v1/checkpoints/{id}
pub async fn delete_checkpoint(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(checkpoint_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let existing = fetch(&state, checkpoint_id).await?;
    require_editor(&state.pool, existing.checkpoint.trip_id, auth.user_id).await?;

    CheckpointRepo::delete(&state.pool, checkpoint_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn validate_coords(lat: f64, lng: f64) -> Result<(), CoreError> {
    if !(-90.0..=90.0).contains(&lat) {
        return Err(CoreError::Validation(
            "Latitude must be between -90 and 90".into(),
        ));
    }
    if !(-180.0..=180.0).contains(&lng) {
        return Err(CoreError::Validation(
            "Longitude must be between -180 and 180".into(),
        ));
    }
    Ok(())
}

fn present_all(
    views: &[MapCheckpointView],
) -> Result<Vec<crate::presenters::JsonMap>, CoreError> {
    views.iter().map(map_checkpoint::present).collect()
}

async fn fetch(state: &AppState, checkpoint_id: DbId) -> AppResult<MapCheckpointView> {
    CheckpointRepo::get(&state.pool, checkpoint_id, false)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MapCheckpoint",
            id: checkpoint_id,
        }))
}

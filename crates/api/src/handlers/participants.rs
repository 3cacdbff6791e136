//! Handlers for trip participants.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use tripline_core::error::CoreError;
use tripline_core::trip::{validate_role, ROLE_OWNER, ROLE_VIEWER};
use tripline_core::types::DbId;
use tripline_db::models::participant::{AddParticipant, UpdateParticipantRole};
use tripline_db::repositories::ParticipantRepo;

use crate::access::{require_member, require_owner};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::presenters::trip_participant;
use crate::state::AppState;

/// Query parameters for participant listing.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Eagerly embed each participant's user record.
    pub with_user: Option<bool>,
    /// Eagerly embed the trip record.
    pub with_trip: Option<bool>,
}

/// GET /api/v1/trips/{id}/participants
pub async fn list_participants(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
    Query(params): Query<ListQuery>,
) -> AppResult<Json<serde_json::Value>> {
    require_member(&state.pool, trip_id, auth.user_id).await?;

    let views = ParticipantRepo::list_for_trip(
        &state.pool,
        trip_id,
        params.with_user.unwrap_or(false),
        params.with_trip.unwrap_or(false),
    )
    .await?;

    let shaped: Vec<_> = views.iter().map(trip_participant::present).collect();
    Ok(Json(serde_json::json!({ "data": shaped })))
}

/// POST /api/v1/trips/{id}/participants
///
/// Add a participant. Owner only; the owner role cannot be granted.
pub async fn add_participant(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
    Json(input): Json<AddParticipant>,
) -> AppResult<impl IntoResponse> {
    require_owner(&state.pool, trip_id, auth.user_id).await?;

    let role = input.role.as_deref().unwrap_or(ROLE_VIEWER);
    validate_role(role)?;
    if role == ROLE_OWNER {
        return Err(AppError::Core(CoreError::Validation(
            "The owner role cannot be granted to another participant".into(),
        )));
    }

    let participant = ParticipantRepo::add(&state.pool, trip_id, input.user_id, role).await?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "data": participant })),
    ))
}

/// PUT /api/v1/trips/{id}/participants/{user_id}
///
/// Change a participant's role. Owner only.
pub async fn update_role(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((trip_id, user_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateParticipantRole>,
) -> AppResult<Json<serde_json::Value>> {
    require_owner(&state.pool, trip_id, auth.user_id).await?;
    validate_role(&input.role)?;
    if input.role == ROLE_OWNER {
        return Err(AppError::Core(CoreError::Validation(
            "The owner role cannot be granted to another participant".into(),
        )));
    }

    let participant = ParticipantRepo::update_role(&state.pool, trip_id, user_id, &input.role)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Participant",
            id: user_id,
        }))?;
    Ok(Json(serde_json::json!({ "data": participant })))
}

/// DELETE /api/v1/trips/{id}/participants/{user_id}
///
/// Remove a participant. The owner may remove anyone but themselves;
/// any member may remove themselves (leave the trip).
pub async fn remove_participant(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((trip_id, user_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let role = require_member(&state.pool, trip_id, auth.user_id).await?;

    if user_id != auth.user_id && role != ROLE_OWNER {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the trip owner may remove other participants".into(),
        )));
    }
    if user_id == auth.user_id && role == ROLE_OWNER {
        return Err(AppError::Core(CoreError::Validation(
            "The owner cannot leave their own trip; delete it instead".into(),
        )));
    }

    if !ParticipantRepo::remove(&state.pool, trip_id, user_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Participant",
            id: user_id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

//! Handlers for trip checklists.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use tripline_core::error::CoreError;
use tripline_core::rel::Rel;
use tripline_core::trip::validate_checklist_content;
use tripline_core::types::DbId;
use tripline_db::models::checklist::{
    ChecklistItemView, CreateChecklistItem, UpdateChecklistItem,
};
use tripline_db::repositories::ChecklistRepo;

use crate::access::{require_editor, require_member};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::presenters::checklist_item;
use crate::state::AppState;

/// Query parameters for checklist listing.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Eagerly load the trip for the always-present `trip` embed.
    /// Defaults to `true`; pass `false` to get the degraded placeholder.
    pub with_trip: Option<bool>,
}

/// GET /api/v1/trips/{id}/checklist
pub async fn list_items(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
    Query(params): Query<ListQuery>,
) -> AppResult<Json<serde_json::Value>> {
    require_member(&state.pool, trip_id, auth.user_id).await?;

    let views =
        ChecklistRepo::list_for_trip(&state.pool, trip_id, params.with_trip.unwrap_or(true))
            .await?;
    let shaped: Vec<_> = views.iter().map(checklist_item::present).collect();
    Ok(Json(serde_json::json!({ "data": shaped })))
}

/// POST /api/v1/trips/{id}/checklist
pub async fn create_item(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
    Json(input): Json<CreateChecklistItem>,
) -> AppResult<impl IntoResponse> {
    require_editor(&state.pool, trip_id, auth.user_id).await?;
    validate_checklist_content(&input.content)?;

    let item = ChecklistRepo::create(&state.pool, trip_id, auth.user_id, &input.content).await?;
    let shaped = checklist_item::present(&ChecklistItemView {
        item,
        trip: Rel::NotLoaded,
    });
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "data": shaped })),
    ))
}

/// PUT /api/v1/checklist/{id}
pub async fn update_item(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
    Json(input): Json<UpdateChecklistItem>,
) -> AppResult<Json<serde_json::Value>> {
    let existing = fetch_item(&state, item_id).await?;
    require_editor(&state.pool, existing.trip_id, auth.user_id).await?;
    if let Some(content) = &input.content {
        validate_checklist_content(content)?;
    }

    let item = ChecklistRepo::update(&state.pool, item_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ChecklistItem",
            id: item_id,
        }))?;
    let shaped = checklist_item::present(&ChecklistItemView {
        item,
        trip: Rel::NotLoaded,
    });
    Ok(Json(serde_json::json!({ "data": shaped })))
}

/// POST /api/v1/checklist/{id}/toggle
pub async fn toggle_item(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let existing = fetch_item(&state, item_id).await?;
    require_editor(&state.pool, existing.trip_id, auth.user_id).await?;

    let item = ChecklistRepo::toggle(&state.pool, item_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ChecklistItem",
            id: item_id,
        }))?;
    let shaped = checklist_item::present(&ChecklistItemView {
        item,
        trip: Rel::NotLoaded,
    });
    Ok(Json(serde_json::json!({ "data": shaped })))
}

/// DELETE /api/v1/checklist/{id}
pub async fn delete_item(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let existing = fetch_item(&state, item_id).await?;
    require_editor(&state.pool, existing.trip_id, auth.user_id).await?;

    ChecklistRepo::delete(&state.pool, item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn fetch_item(
    state: &AppState,
    item_id: DbId,
) -> AppResult<tripline_db::models::checklist::ChecklistItem> {
    ChecklistRepo::get(&state.pool, item_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ChecklistItem",
            id: item_id,
        }))
}

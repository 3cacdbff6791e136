//! Handlers for chat sessions and messages.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tripline_core::chat::{validate_message, validate_sender, SENDER_USER};
use tripline_core::error::CoreError;
use tripline_core::types::DbId;
use tripline_db::models::chat::{CreateChatMessage, CreateChatSession};
use tripline_db::repositories::ChatRepo;

use crate::access::require_member;
use crate::error::{AppError, AppResult};
use crate::handlers::Page;
use crate::middleware::auth::AuthUser;
use crate::presenters::chat_message;
use crate::state::AppState;

/// GET /api/v1/chat/sessions
pub async fn list_sessions(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(page): Query<Page>,
) -> AppResult<Json<serde_json::Value>> {
    let sessions =
        ChatRepo::list_sessions(&state.pool, auth.user_id, page.limit(), page.offset()).await?;
    Ok(Json(serde_json::json!({ "data": sessions })))
}

/// POST /api/v1/chat/sessions
pub async fn create_session(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateChatSession>,
) -> AppResult<impl IntoResponse> {
    if let Some(trip_id) = input.trip_id {
        require_member(&state.pool, trip_id, auth.user_id).await?;
    }

    let session = ChatRepo::create_session(
        &state.pool,
        auth.user_id,
        input.trip_id,
        input.title.as_deref(),
    )
    .await?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "data": session })),
    ))
}

/// GET /api/v1/chat/sessions/{id}/messages
pub async fn list_messages(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(session_id): Path<DbId>,
    Query(page): Query<Page>,
) -> AppResult<Json<serde_json::Value>> {
    ensure_session(&state, session_id, auth.user_id).await?;

    let views =
        ChatRepo::list_messages(&state.pool, session_id, page.limit(), page.offset()).await?;
    let shaped: Vec<_> = views.iter().map(chat_message::present).collect();
    Ok(Json(serde_json::json!({ "data": shaped })))
}

/// POST /api/v1/chat/sessions/{id}/messages
pub async fn create_message(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(session_id): Path<DbId>,
    Json(input): Json<CreateChatMessage>,
) -> AppResult<impl IntoResponse> {
    ensure_session(&state, session_id, auth.user_id).await?;

    let sender = input.sender.as_deref().unwrap_or(SENDER_USER);
    validate_sender(sender)?;
    validate_message(&input.message)?;

    let view = ChatRepo::create_message(&state.pool, session_id, sender, &input).await?;
    let shaped = chat_message::present(&view);
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "data": shaped })),
    ))
}

async fn ensure_session(state: &AppState, session_id: DbId, user_id: DbId) -> AppResult<()> {
    ChatRepo::get_session(&state.pool, session_id, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ChatSession",
            id: session_id,
        }))?;
    Ok(())
}

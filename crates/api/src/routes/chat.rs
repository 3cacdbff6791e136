//! Route definitions for chat sessions and messages.

use axum::routing::get;
use axum::Router;

use crate::handlers::chat;
use crate::state::AppState;

/// Chat routes mounted at `/chat`.
///
/// ```text
/// GET  /sessions                 -> list_sessions
/// POST /sessions                 -> create_session
/// GET  /sessions/{id}/messages   -> list_messages
/// POST /sessions/{id}/messages   -> create_message
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/sessions",
            get(chat::list_sessions).post(chat::create_session),
        )
        .route(
            "/sessions/{id}/messages",
            get(chat::list_messages).post(chat::create_message),
        )
}

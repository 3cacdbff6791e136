//! Route definitions for the tag catalog.
//!
//! Trip-scoped tag attachment lives under the trip routes; this router
//! only covers the global catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::tags;
use crate::state::AppState;

/// Tag catalog routes mounted at `/tags`.
///
/// ```text
/// GET  /   -> list_tags
/// POST /   -> create_tag
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(tags::list_tags).post(tags::create_tag))
}

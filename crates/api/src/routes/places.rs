//! Route definitions for place reviews.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::reviews;
use crate::state::AppState;

/// Place-scoped review routes mounted at `/places`.
///
/// ```text
/// GET    /{id}/reviews   -> list_reviews
/// POST   /{id}/reviews   -> create_review
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}/reviews",
        get(reviews::list_reviews).post(reviews::create_review),
    )
}

/// Top-level review routes mounted at `/reviews`.
///
/// ```text
/// PUT    /{id}   -> update_review
/// DELETE /{id}   -> delete_review
/// ```
pub fn review_router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        put(reviews::update_review).delete(reviews::delete_review),
    )
}

//! Route definitions for favorites.

use axum::routing::get;
use axum::Router;

use crate::handlers::favorites;
use crate::state::AppState;

/// Favorite routes mounted at `/favorites`.
///
/// ```text
/// GET    /       -> list_favorites (?with_favoritable, limit, offset)
/// POST   /       -> create_favorite
/// DELETE /{id}   -> delete_favorite
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(favorites::list_favorites).post(favorites::create_favorite),
        )
        .route(
            "/{id}",
            axum::routing::delete(favorites::delete_favorite),
        )
}

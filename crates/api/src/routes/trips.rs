//! Route definitions for trips and their nested resources.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::{checklist, checkpoints, diaries, itinerary, participants, tags, trips};
use crate::state::AppState;

/// Trip routes mounted at `/trips`.
///
/// ```text
/// GET    /                           -> list_trips
/// POST   /                           -> create_trip
/// GET    /{id}                       -> get_trip
/// PUT    /{id}                       -> update_trip
/// DELETE /{id}                       -> delete_trip
///
/// GET    /{id}/participants          -> list_participants
/// POST   /{id}/participants          -> add_participant
/// PUT    /{id}/participants/{uid}    -> update_role
/// DELETE /{id}/participants/{uid}    -> remove_participant
///
/// GET    /{id}/checklist             -> list_items
/// POST   /{id}/checklist             -> create_item
///
/// GET    /{id}/itinerary             -> list_entries
/// POST   /{id}/itinerary             -> create_entry
///
/// GET    /{id}/checkpoints           -> list_checkpoints
/// POST   /{id}/checkpoints           -> create_checkpoint
/// GET    /{id}/checkpoints/nearby    -> nearby_checkpoints
///
/// GET    /{id}/diaries               -> list_diaries
/// POST   /{id}/diaries               -> create_diary
///
/// GET    /{id}/tags                  -> list_trip_tags
/// POST   /{id}/tags/{tag_id}         -> attach_tag
/// DELETE /{id}/tags/{tag_id}         -> detach_tag
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(trips::list_trips).post(trips::create_trip))
        .route(
            "/{id}",
            get(trips::get_trip)
                .put(trips::update_trip)
                .delete(trips::delete_trip),
        )
        .route(
            "/{id}/participants",
            get(participants::list_participants).post(participants::add_participant),
        )
        .route(
            "/{id}/participants/{user_id}",
            put(participants::update_role).delete(participants::remove_participant),
        )
        .route(
            "/{id}/checklist",
            get(checklist::list_items).post(checklist::create_item),
        )
        .route(
            "/{id}/itinerary",
            get(itinerary::list_entries).post(itinerary::create_entry),
        )
        .route(
            "/{id}/checkpoints",
            get(checkpoints::list_checkpoints).post(checkpoints::create_checkpoint),
        )
        .route("/{id}/checkpoints/nearby", get(checkpoints::nearby_checkpoints))
        .route(
            "/{id}/diaries",
            get(diaries::list_diaries).post(diaries::create_diary),
        )
        .route("/{id}/tags", get(tags::list_trip_tags))
        .route(
            "/{id}/tags/{tag_id}",
            post(tags::attach_tag).delete(tags::detach_tag),
        )
}

/// Top-level checklist item routes mounted at `/checklist`.
///
/// ```text
/// PUT    /{id}          -> update_item
/// POST   /{id}/toggle   -> toggle_item
/// DELETE /{id}          -> delete_item
/// ```
pub fn checklist_router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            put(checklist::update_item).delete(checklist::delete_item),
        )
        .route("/{id}/toggle", post(checklist::toggle_item))
}

/// Top-level itinerary routes mounted at `/itinerary`.
///
/// ```text
/// PUT    /{id}   -> update_entry
/// DELETE /{id}   -> delete_entry
/// ```
pub fn itinerary_router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        put(itinerary::update_entry).delete(itinerary::delete_entry),
    )
}

/// Top-level checkpoint routes mounted at `/checkpoints`.
///
/// ```text
/// GET    /{id}            -> get_checkpoint
/// PUT    /{id}            -> update_checkpoint
/// DELETE /{id}            -> delete_checkpoint
/// POST   /{id}/check-in   -> check_in
/// ```
pub fn checkpoint_router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(checkpoints::get_checkpoint)
                .put(checkpoints::update_checkpoint)
                .delete(checkpoints::delete_checkpoint),
        )
        .route("/{id}/check-in", post(checkpoints::check_in))
}

/// Top-level diary routes mounted at `/diaries`.
///
/// ```text
/// GET    /{id}            -> get_diary
/// PUT    /{id}            -> update_diary
/// DELETE /{id}            -> delete_diary
/// GET    /{id}/comments   -> list_comments
/// POST   /{id}/comments   -> create_comment
/// ```
pub fn diary_router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(diaries::get_diary)
                .put(diaries::update_diary)
                .delete(diaries::delete_diary),
        )
        .route(
            "/{id}/comments",
            get(diaries::list_comments).post(diaries::create_comment),
        )
}

/// Top-level comment routes mounted at `/comments`.
///
/// ```text
/// DELETE /{id}   -> delete_comment
/// ```
pub fn comment_router() -> Router<AppState> {
    Router::new().route("/{id}", delete(crate::handlers::comments::delete_comment))
}

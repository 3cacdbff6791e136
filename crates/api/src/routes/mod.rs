pub mod chat;
pub mod favorites;
pub mod health;
pub mod integrations;
pub mod notifications;
pub mod places;
pub mod tags;
pub mod trips;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /trips                              list, create
/// /trips/{id}                         get, update, delete
/// /trips/{id}/participants            list, add
/// /trips/{id}/participants/{uid}      update role, remove
/// /trips/{id}/checklist               list, create
/// /trips/{id}/itinerary               list, create
/// /trips/{id}/checkpoints             list, create
/// /trips/{id}/checkpoints/nearby      proximity search (GET)
/// /trips/{id}/diaries                 list, create
/// /trips/{id}/tags                    list
/// /trips/{id}/tags/{tag_id}           attach (POST), detach (DELETE)
///
/// /checklist/{id}                     update, delete
/// /checklist/{id}/toggle              toggle checked flag (POST)
///
/// /itinerary/{id}                     update, delete
///
/// /checkpoints/{id}                   get, update, delete
/// /checkpoints/{id}/check-in          record check-in (POST)
///
/// /diaries/{id}                       get, update, delete
/// /diaries/{id}/comments              list, create
/// /comments/{id}                      delete
///
/// /places/{id}/reviews                list, create
/// /reviews/{id}                       update, delete
///
/// /favorites                          list, create
/// /favorites/{id}                     delete
///
/// /notifications                      list (?unread_only, limit, offset)
/// /notifications/unread-count         unread count (GET)
/// /notifications/read-all             mark all read (POST)
/// /notifications/{id}/read            mark read (POST)
///
/// /tags                               list, create
///
/// /chat/sessions                      list, create
/// /chat/sessions/{id}/messages        list, post
///
/// /integrations/translate             Papago translation (POST)
/// /integrations/ocr                   CLOVA OCR (POST)
/// /integrations/speech                CLOVA speech-to-text (POST)
/// /integrations/maps/geocode          NAVER geocoding (GET)
/// /integrations/maps/search           NAVER local search (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Trips and their nested sub-resources.
        .nest("/trips", trips::router())
        // Checklist items addressed directly.
        .nest("/checklist", trips::checklist_router())
        // Itinerary entries addressed directly.
        .nest("/itinerary", trips::itinerary_router())
        // Checkpoints addressed directly, including check-in.
        .nest("/checkpoints", trips::checkpoint_router())
        // Diaries addressed directly, including their comments.
        .nest("/diaries", trips::diary_router())
        // Comment deletion.
        .nest("/comments", trips::comment_router())
        // Place-scoped reviews.
        .nest("/places", places::router())
        // Reviews addressed directly.
        .nest("/reviews", places::review_router())
        // The authenticated user's favorites.
        .nest("/favorites", favorites::router())
        // Notifications and read tracking.
        .nest("/notifications", notifications::router())
        // Global tag catalog.
        .nest("/tags", tags::router())
        // Assistant chat sessions.
        .nest("/chat", chat::router())
        // NAVER cloud service bridges.
        .nest("/integrations", integrations::router())
}

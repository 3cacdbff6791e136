//! Route definitions for NAVER service bridges.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::integrations;
use crate::state::AppState;

/// Integration routes mounted at `/integrations`.
///
/// ```text
/// POST /translate      -> translate
/// POST /ocr            -> ocr
/// POST /speech         -> speech (raw audio body, ?lang)
/// GET  /maps/geocode   -> geocode (?query)
/// GET  /maps/search    -> local_search (?query, display, save)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/translate", post(integrations::translate))
        .route("/ocr", post(integrations::ocr))
        .route("/speech", post(integrations::speech))
        .route("/maps/geocode", get(integrations::geocode))
        .route("/maps/search", get(integrations::local_search))
}

//! Handlers bridging NAVER cloud services: translation, OCR, speech
//! recognition, geocoding, and local place search.

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use tripline_core::error::CoreError;
use tripline_db::repositories::PlaceRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for translation.
#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    /// Source language code, e.g. `ko`. Defaults to `ko`.
    pub source: Option<String>,
    /// Target language code, e.g. `en`. Defaults to `en`.
    pub target: Option<String>,
    pub text: String,
}

/// Request body for OCR.
#[derive(Debug, Deserialize)]
pub struct OcrRequest {
    /// Base64-encoded image payload.
    pub image: String,
    /// Image format, e.g. `jpg` or `png`. Defaults to `jpg`.
    pub format: Option<String>,
}

/// Query parameters for speech recognition.
#[derive(Debug, Deserialize)]
pub struct SpeechQuery {
    /// CLOVA recognition language, e.g. `Kor`. Defaults to `Kor`.
    pub lang: Option<String>,
}

/// Query parameters for geocoding.
#[derive(Debug, Deserialize)]
pub struct GeocodeQuery {
    pub query: String,
}

/// Query parameters for local place search.
#[derive(Debug, Deserialize)]
pub struct LocalSearchQuery {
    pub query: String,
    /// Number of results, 1 through 5 per the upstream API. Defaults to 5.
    pub display: Option<u8>,
    /// Persist results into the places table for later referencing.
    pub save: Option<bool>,
}

/// POST /api/v1/integrations/translate
pub async fn translate(
    _auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<TranslateRequest>,
) -> AppResult<Json<serde_json::Value>> {
    if input.text.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Text to translate must not be empty".into(),
        )));
    }
    let source = input.source.as_deref().unwrap_or("ko");
    let target = input.target.as_deref().unwrap_or("en");

    let translated = state
        .naver
        .papago
        .translate(source, target, &input.text)
        .await?;
    Ok(Json(serde_json::json!({ "data": {
        "source": source,
        "target": target,
        "translated_text": translated,
    } })))
}

/// POST /api/v1/integrations/ocr
pub async fn ocr(
    _auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<OcrRequest>,
) -> AppResult<Json<serde_json::Value>> {
    if input.image.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Image payload must not be empty".into(),
        )));
    }
    let format = input.format.as_deref().unwrap_or("jpg");

    let text = state.naver.ocr.extract_text(&input.image, format).await?;
    Ok(Json(serde_json::json!({ "data": { "text": text } })))
}

/// POST /api/v1/integrations/speech
///
/// Accepts raw audio bytes as the request body.
pub async fn speech(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<SpeechQuery>,
    audio: Bytes,
) -> AppResult<Json<serde_json::Value>> {
    if audio.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Audio payload must not be empty".into(),
        )));
    }
    let lang = params.lang.as_deref().unwrap_or("Kor");

    let text = state.naver.speech.recognize(audio.to_vec(), lang).await?;
    Ok(Json(serde_json::json!({ "data": { "text": text } })))
}

/// GET /api/v1/integrations/maps/geocode
pub async fn geocode(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<GeocodeQuery>,
) -> AppResult<Json<serde_json::Value>> {
    if params.query.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Geocode query must not be empty".into(),
        )));
    }

    let results = state.naver.maps.geocode(&params.query).await?;
    Ok(Json(serde_json::json!({ "data": results })))
}

/// GET /api/v1/integrations/maps/search
///
/// Proxies NAVER local search. With `save=true`, each result is
/// upserted into the places table (keyed by its NAVER link) so clients
/// can immediately reference it from reviews and checkpoints.
pub async fn local_search(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<LocalSearchQuery>,
) -> AppResult<Json<serde_json::Value>> {
    if params.query.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Search query must not be empty".into(),
        )));
    }
    let display = params.display.unwrap_or(5).clamp(1, 5);

    let items = state.naver.maps.local_search(&params.query, display).await?;

    if !params.save.unwrap_or(false) {
        return Ok(Json(serde_json::json!({ "data": items })));
    }

    let mut places = Vec::with_capacity(items.len());
    for item in &items {
        if item.link.is_empty() {
            continue;
        }
        let Some((lat, lng)) = katech_to_wgs84(&item.map_y, &item.map_x) else {
            continue;
        };
        let name = strip_markup(&item.title);
        let place = PlaceRepo::upsert_from_naver(
            &state.pool,
            &name,
            Some(&item.road_address).filter(|a| !a.is_empty()).map(|a| a.as_str()),
            Some(&item.category).filter(|c| !c.is_empty()).map(|c| c.as_str()),
            lat,
            lng,
            &item.link,
        )
        .await?;
        places.push(place);
    }
    Ok(Json(serde_json::json!({ "data": places })))
}

/// The local search API returns coordinates scaled by 1e7.
fn katech_to_wgs84(map_y: &str, map_x: &str) -> Option<(f64, f64)> {
    let lat = map_y.parse::<f64>().ok()? / 10_000_000.0;
    let lng = map_x.parse::<f64>().ok()? / 10_000_000.0;
    Some((lat, lng))
}

/// Local search titles carry `<b>` highlight markup.
fn strip_markup(title: &str) -> String {
    title.replace("<b>", "").replace("</b>", "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_local_search_coordinates() {
        let (lat, lng) = katech_to_wgs84("375700510", "1269682143").unwrap();
        assert!((lat - 37.5700510).abs() < 1e-9);
        assert!((lng - 126.9682143).abs() < 1e-9);
    }

    #[test]
    fn rejects_non_numeric_coordinates() {
        assert!(katech_to_wgs84("abc", "1269682143").is_none());
    }

    #[test]
    fn strips_highlight_markup_from_titles() {
        assert_eq!(strip_markup("<b>광장</b>시장"), "광장시장");
    }
}

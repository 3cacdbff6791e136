//! HTTP client wrappers for the NAVER open APIs.
//!
//! One [`NaverClient`] is built at startup and registered on the API
//! crate's `AppState`; handlers call into the per-service wrappers and
//! shape the responses for clients. No retry or queueing layer lives
//! here.

pub mod maps;
pub mod ocr;
pub mod papago;
pub mod speech;

use std::time::Duration;

pub use maps::{GeocodeResult, LocalSearchItem, MapsClient};
pub use ocr::OcrClient;
pub use papago::PapagoClient;
pub use speech::SpeechClient;

/// Errors from any NAVER service call.
#[derive(Debug, thiserror::Error)]
pub enum NaverError {
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("NAVER API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Unexpected NAVER API response shape: {0}")]
    Shape(String),
}

/// Credentials and base URLs for the NAVER services.
///
/// Base URLs are overridable so tests can point the client at a stub
/// server.
#[derive(Debug, Clone)]
pub struct NaverConfig {
    /// NCP API gateway key ID (`X-NCP-APIGW-API-KEY-ID`).
    pub ncp_key_id: String,
    /// NCP API gateway key (`X-NCP-APIGW-API-KEY`).
    pub ncp_key: String,
    /// Developer-center client ID (`X-Naver-Client-Id`), used by local search.
    pub client_id: String,
    /// Developer-center client secret (`X-Naver-Client-Secret`).
    pub client_secret: String,
    /// CLOVA OCR invoke secret (`X-OCR-SECRET`).
    pub ocr_secret: String,
    pub maps_base_url: String,
    pub search_base_url: String,
    pub papago_base_url: String,
    pub ocr_invoke_url: String,
    pub speech_base_url: String,
}

/// Aggregate client carrying one wrapper per NAVER service.
#[derive(Clone)]
pub struct NaverClient {
    pub maps: MapsClient,
    pub papago: PapagoClient,
    pub ocr: OcrClient,
    pub speech: SpeechClient,
}

impl NaverClient {
    /// Build all service wrappers over a single reqwest client.
    pub fn new(config: NaverConfig) -> Result<Self, NaverError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()?;

        Ok(Self {
            maps: MapsClient::new(http.clone(), &config),
            papago: PapagoClient::new(http.clone(), &config),
            ocr: OcrClient::new(http.clone(), &config),
            speech: SpeechClient::new(http, &config),
        })
    }
}

/// Turn a non-success response into [`NaverError::Api`].
pub(crate) async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, NaverError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    Err(NaverError::Api { status, body })
}

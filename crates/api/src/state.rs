use std::sync::Arc;

use tripline_naver::NaverClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: tripline_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// NAVER service clients (maps, Papago, OCR, speech).
    pub naver: Arc<NaverClient>,
}

use tripline_naver::NaverConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// NAVER service credentials and base URLs.
    pub naver: NaverConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    ///
    /// NAVER credentials (`NAVER_NCP_KEY_ID`, `NAVER_NCP_KEY`,
    /// `NAVER_CLIENT_ID`, `NAVER_CLIENT_SECRET`, `NAVER_OCR_SECRET`)
    /// default to empty strings; the integration endpoints return
    /// upstream auth errors until they are set. Base URLs
    /// (`NAVER_MAPS_URL`, `NAVER_SEARCH_URL`, `NAVER_PAPAGO_URL`,
    /// `NAVER_OCR_INVOKE_URL`, `NAVER_SPEECH_URL`) default to the
    /// public endpoints and exist so tests can target a stub server.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let naver = NaverConfig {
            ncp_key_id: env_or_default("NAVER_NCP_KEY_ID", ""),
            ncp_key: env_or_default("NAVER_NCP_KEY", ""),
            client_id: env_or_default("NAVER_CLIENT_ID", ""),
            client_secret: env_or_default("NAVER_CLIENT_SECRET", ""),
            ocr_secret: env_or_default("NAVER_OCR_SECRET", ""),
            maps_base_url: env_or_default(
                "NAVER_MAPS_URL",
                "https://naveropenapi.apigw.ntruss.com",
            ),
            search_base_url: env_or_default("NAVER_SEARCH_URL", "https://openapi.naver.com"),
            papago_base_url: env_or_default(
                "NAVER_PAPAGO_URL",
                "https://naveropenapi.apigw.ntruss.com",
            ),
            ocr_invoke_url: env_or_default("NAVER_OCR_INVOKE_URL", ""),
            speech_base_url: env_or_default(
                "NAVER_SPEECH_URL",
                "https://naveropenapi.apigw.ntruss.com",
            ),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            naver,
        }
    }
}

fn env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

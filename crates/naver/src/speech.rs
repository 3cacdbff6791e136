//! CLOVA Speech recognition.

use serde::Deserialize;

use crate::{check_status, NaverConfig, NaverError};

#[derive(Debug, Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    text: String,
}

/// Wrapper over the CLOVA Speech short-sentence recognition endpoint.
#[derive(Clone)]
pub struct SpeechClient {
    http: reqwest::Client,
    ncp_key_id: String,
    ncp_key: String,
    base_url: String,
}

impl SpeechClient {
    pub fn new(http: reqwest::Client, config: &NaverConfig) -> Self {
        Self {
            http,
            ncp_key_id: config.ncp_key_id.clone(),
            ncp_key: config.ncp_key.clone(),
            base_url: config.speech_base_url.clone(),
        }
    }

    /// Transcribe raw audio bytes. `lang` is a recognition language code
    /// (e.g. `Kor`, `Eng`).
    pub async fn recognize(&self, audio: Vec<u8>, lang: &str) -> Result<String, NaverError> {
        let url = format!("{}/recog/v1/stt", self.base_url);
        let response = self
            .http
            .post(&url)
            .query(&[("lang", lang)])
            .header("X-NCP-APIGW-API-KEY-ID", &self.ncp_key_id)
            .header("X-NCP-APIGW-API-KEY", &self.ncp_key)
            .header("Content-Type", "application/octet-stream")
            .body(audio)
            .send()
            .await?;

        let response = check_status(response).await?;
        let body: RecognizeResponse = response.json().await?;
        Ok(body.text)
    }
}

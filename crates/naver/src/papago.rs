//! Papago machine translation.

use serde::Deserialize;

use crate::{check_status, NaverConfig, NaverError};

#[derive(Debug, Deserialize)]
struct TranslationResponse {
    message: TranslationMessage,
}

#[derive(Debug, Deserialize)]
struct TranslationMessage {
    result: TranslationResult,
}

#[derive(Debug, Deserialize)]
struct TranslationResult {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// Wrapper over the Papago NMT endpoint.
#[derive(Clone)]
pub struct PapagoClient {
    http: reqwest::Client,
    ncp_key_id: String,
    ncp_key: String,
    base_url: String,
}

impl PapagoClient {
    pub fn new(http: reqwest::Client, config: &NaverConfig) -> Self {
        Self {
            http,
            ncp_key_id: config.ncp_key_id.clone(),
            ncp_key: config.ncp_key.clone(),
            base_url: config.papago_base_url.clone(),
        }
    }

    /// Translate `text` from `source` to `target` (BCP-47-ish codes,
    /// e.g. `ko`, `en`).
    pub async fn translate(
        &self,
        source: &str,
        target: &str,
        text: &str,
    ) -> Result<String, NaverError> {
        let url = format!("{}/nmt/v1/translation", self.base_url);
        let response = self
            .http
            .post(&url)
            .header("X-NCP-APIGW-API-KEY-ID", &self.ncp_key_id)
            .header("X-NCP-APIGW-API-KEY", &self.ncp_key)
            .form(&[("source", source), ("target", target), ("text", text)])
            .send()
            .await?;

        let response = check_status(response).await?;
        let body: TranslationResponse = response.json().await?;
        Ok(body.message.result.translated_text)
    }
}

//! CLOVA OCR text extraction.

use serde::Deserialize;
use serde_json::json;

use crate::{check_status, NaverConfig, NaverError};

#[derive(Debug, Deserialize)]
struct OcrResponse {
    #[serde(default)]
    images: Vec<OcrImage>,
}

#[derive(Debug, Deserialize)]
struct OcrImage {
    #[serde(default)]
    fields: Vec<OcrField>,
}

#[derive(Debug, Deserialize)]
struct OcrField {
    #[serde(rename = "inferText", default)]
    infer_text: String,
}

/// Wrapper over the CLOVA OCR invoke URL.
#[derive(Clone)]
pub struct OcrClient {
    http: reqwest::Client,
    secret: String,
    invoke_url: String,
}

impl OcrClient {
    pub fn new(http: reqwest::Client, config: &NaverConfig) -> Self {
        Self {
            http,
            secret: config.ocr_secret.clone(),
            invoke_url: config.ocr_invoke_url.clone(),
        }
    }

    /// Extract text from a base64-encoded image, joined line by line.
    pub async fn extract_text(
        &self,
        image_base64: &str,
        image_format: &str,
    ) -> Result<String, NaverError> {
        let request_body = json!({
            "version": "V2",
            "requestId": "tripline",
            "timestamp": 0,
            "images": [{
                "format": image_format,
                "name": "upload",
                "data": image_base64,
            }],
        });

        let response = self
            .http
            .post(&self.invoke_url)
            .header("X-OCR-SECRET", &self.secret)
            .json(&request_body)
            .send()
            .await?;

        let response = check_status(response).await?;
        let body: OcrResponse = response.json().await?;

        let lines: Vec<String> = body
            .images
            .into_iter()
            .flat_map(|image| image.fields)
            .map(|field| field.infer_text)
            .collect();
        Ok(lines.join(" "))
    }
}

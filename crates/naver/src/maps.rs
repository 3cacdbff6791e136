//! NAVER Maps geocoding and local search.

use serde::{Deserialize, Serialize};

use crate::{check_status, NaverConfig, NaverError};

/// One match from the geocoding API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodeResult {
    #[serde(rename = "roadAddress", default)]
    pub road_address: String,
    #[serde(rename = "jibunAddress", default)]
    pub jibun_address: String,
    /// Longitude as a decimal string.
    pub x: String,
    /// Latitude as a decimal string.
    pub y: String,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    addresses: Vec<GeocodeResult>,
}

/// One item from the local search API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalSearchItem {
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(rename = "roadAddress", default)]
    pub road_address: String,
    /// Longitude in KATECH millionths, as returned by the API.
    #[serde(rename = "mapx", default)]
    pub map_x: String,
    /// Latitude in KATECH millionths, as returned by the API.
    #[serde(rename = "mapy", default)]
    pub map_y: String,
    #[serde(default)]
    pub link: String,
}

#[derive(Debug, Deserialize)]
struct LocalSearchResponse {
    #[serde(default)]
    items: Vec<LocalSearchItem>,
}

/// Wrapper over the Maps geocoding and local search endpoints.
#[derive(Clone)]
pub struct MapsClient {
    http: reqwest::Client,
    ncp_key_id: String,
    ncp_key: String,
    client_id: String,
    client_secret: String,
    maps_base_url: String,
    search_base_url: String,
}

impl MapsClient {
    pub fn new(http: reqwest::Client, config: &NaverConfig) -> Self {
        Self {
            http,
            ncp_key_id: config.ncp_key_id.clone(),
            ncp_key: config.ncp_key.clone(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            maps_base_url: config.maps_base_url.clone(),
            search_base_url: config.search_base_url.clone(),
        }
    }

    /// Geocode a free-form address query.
    pub async fn geocode(&self, query: &str) -> Result<Vec<GeocodeResult>, NaverError> {
        let url = format!("{}/map-geocode/v2/geocode", self.maps_base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("query", query)])
            .header("X-NCP-APIGW-API-KEY-ID", &self.ncp_key_id)
            .header("X-NCP-APIGW-API-KEY", &self.ncp_key)
            .send()
            .await?;

        let response = check_status(response).await?;
        let body: GeocodeResponse = response.json().await?;
        Ok(body.addresses)
    }

    /// Search places near a query string via the local search API.
    pub async fn local_search(
        &self,
        query: &str,
        display: u8,
    ) -> Result<Vec<LocalSearchItem>, NaverError> {
        let url = format!("{}/v1/search/local.json", self.search_base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("query", query), ("display", &display.to_string())])
            .header("X-Naver-Client-Id", &self.client_id)
            .header("X-Naver-Client-Secret", &self.client_secret)
            .send()
            .await?;

        let response = check_status(response).await?;
        let body: LocalSearchResponse = response.json().await?;
        Ok(body.items)
    }
}

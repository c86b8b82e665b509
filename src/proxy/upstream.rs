use std::time::Duration;

use reqwest::Client;

use crate::config::{PlacesConfig, SecureString};
use crate::locator::provider::{SearchTextRequest, SearchTextResponse, FIELD_MASK};
use crate::locator::Coordinate;
use crate::proxy::error::LocatorError;

const API_KEY_HEADER: &str = "X-Goog-Api-Key";
const FIELD_MASK_HEADER: &str = "X-Goog-FieldMask";

/// Client for the places-search provider.
///
/// One attempt per call: no retries, no backoff, no overall timeout beyond
/// the connect timeout. Holds no per-request state, so a single instance is
/// shared by every request.
#[derive(Clone)]
pub struct PlacesClient {
    client: Client,
    endpoint: String,
}

impl PlacesClient {
    pub fn new(config: &PlacesConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run the food-assistance text search around `center`.
    pub async fn search_text(
        &self,
        api_key: &SecureString,
        center: Coordinate,
    ) -> Result<SearchTextResponse, LocatorError> {
        let payload = SearchTextRequest::food_assistance_near(center);

        let response = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, api_key.expose())
            .header(FIELD_MASK_HEADER, FIELD_MASK)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(LocatorError::Upstream { status, body });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| LocatorError::Unexpected(format!("Failed to decode places response: {}", e)))
    }
}

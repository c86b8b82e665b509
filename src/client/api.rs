//! Client for the locator's own search endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::locator::{Coordinate, Place};

/// Shown when a failure carries no message of its own.
pub const SEARCH_FALLBACK_MESSAGE: &str = "Could not find nearby food banks. Please try again.";

#[derive(Debug, Clone, Error)]
pub enum SearchApiError {
    /// The endpoint answered with a non-success status.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The request never completed or the body could not be read.
    #[error("{0}")]
    Transport(String),
}

impl SearchApiError {
    /// Message surfaced verbatim in the UI.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            SEARCH_FALLBACK_MESSAGE.to_string()
        } else {
            message
        }
    }
}

/// The search operation as seen from the client.
#[async_trait]
pub trait SearchApi: Send + Sync {
    async fn search(&self, at: Coordinate) -> Result<Vec<Place>, SearchApiError>;
}

#[derive(Deserialize)]
struct PlacesBody {
    #[serde(default)]
    places: Vec<Place>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// `SearchApi` over HTTP against `POST {base_url}/api/locator/search`.
#[derive(Clone)]
pub struct HttpSearchApi {
    client: Client,
    url: String,
}

impl HttpSearchApi {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            url: format!(
                "{}{}",
                base_url.trim_end_matches('/'),
                crate::proxy::router::SEARCH_PATH
            ),
        }
    }
}

#[async_trait]
impl SearchApi for HttpSearchApi {
    async fn search(&self, at: Coordinate) -> Result<Vec<Place>, SearchApiError> {
        let response = self
            .client
            .post(&self.url)
            .json(&serde_json::json!({ "lat": at.lat, "lng": at.lng }))
            .send()
            .await
            .map_err(|e| SearchApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|b| b.error)
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| format!("Server error: {}", status.as_u16()));
            return Err(SearchApiError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let body: PlacesBody = response
            .json()
            .await
            .map_err(|e| SearchApiError::Transport(e.to_string()))?;
        Ok(body.places)
    }
}

//! Normalized search result.

use serde::{Deserialize, Serialize};

use super::provider::ProviderPlace;
use super::Coordinate;

pub const UNKNOWN_NAME: &str = "Unknown Name";
pub const ADDRESS_UNAVAILABLE: &str = "Address unavailable";

/// One candidate aid location, as returned by `POST /api/locator/search`.
///
/// Optional fields stay `None` when the provider omits them; they are
/// skipped on serialization rather than written as `false` or `0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Provider resource name (`places/<PLACE_ID>`), unique within a result set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub formatted_address: String,
    pub location: Coordinate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_open_now: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_rating_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_maps_uri: Option<String>,
}

impl Place {
    /// Reshape a provider result, filling placeholders for missing text and
    /// `0.0` for missing coordinate components.
    pub fn from_provider(raw: ProviderPlace) -> Self {
        let name = raw
            .display_name
            .and_then(|d| d.text)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| UNKNOWN_NAME.to_string());

        let formatted_address = raw
            .formatted_address
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| ADDRESS_UNAVAILABLE.to_string());

        let location = raw.location.unwrap_or_default();

        Self {
            id: raw.name,
            name,
            formatted_address,
            location: Coordinate {
                lat: location.latitude.unwrap_or(0.0),
                lng: location.longitude.unwrap_or(0.0),
            },
            is_open_now: raw.regular_opening_hours.and_then(|h| h.open_now),
            rating: raw.rating,
            user_rating_count: raw.user_rating_count,
            website_uri: raw.website_uri,
            google_maps_uri: raw.google_maps_uri,
        }
    }

    /// True when this place carries the given id.
    pub fn has_id(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }
}

//! Wire types for the places-search provider (Places API v1 `searchText`).
//!
//! Only the fields named in [`FIELD_MASK`] are modelled. Every field is
//! optional because the provider omits what it does not know.

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Free-text query covering every kind of emergency food location.
pub const TEXT_QUERY: &str = "food pantry, food bank, soup kitchen, emergency food assistance";

/// Provider-side cap on returned places.
pub const MAX_RESULT_COUNT: u32 = 20;

/// Radius of the location bias circle, in meters.
pub const SEARCH_RADIUS_METERS: f64 = 25_000.0;

/// Results are ranked nearest first.
pub const RANK_BY_DISTANCE: &str = "DISTANCE";

/// Response fields requested from the provider. Not inferred: extend this
/// list when [`ProviderPlace`] grows a field.
pub const FIELD_MASK: &str = "places.name,places.displayName,places.formattedAddress,places.location,places.regularOpeningHours,places.rating,places.userRatingCount,places.websiteUri,places.googleMapsUri";

/// Request body for a text search biased toward a circle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTextRequest {
    pub text_query: String,
    pub max_result_count: u32,
    pub location_bias: LocationBias,
    pub rank_preference: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationBias {
    pub circle: Circle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Circle {
    pub center: LatLng,
    pub radius: f64,
}

impl SearchTextRequest {
    /// The fixed food-assistance query centered on `center`.
    pub fn food_assistance_near(center: Coordinate) -> Self {
        Self {
            text_query: TEXT_QUERY.to_string(),
            max_result_count: MAX_RESULT_COUNT,
            location_bias: LocationBias {
                circle: Circle {
                    center: LatLng {
                        latitude: Some(center.lat),
                        longitude: Some(center.lng),
                    },
                    radius: SEARCH_RADIUS_METERS,
                },
            },
            rank_preference: RANK_BY_DISTANCE.to_string(),
        }
    }
}

/// Top-level `searchText` response. `places` is absent when nothing matched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchTextResponse {
    #[serde(default)]
    pub places: Vec<ProviderPlace>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderPlace {
    /// Resource name, `places/<PLACE_ID>`.
    pub name: Option<String>,
    pub display_name: Option<LocalizedText>,
    pub formatted_address: Option<String>,
    pub location: Option<LatLng>,
    pub regular_opening_hours: Option<OpeningHours>,
    pub rating: Option<f64>,
    pub user_rating_count: Option<u32>,
    pub website_uri: Option<String>,
    pub google_maps_uri: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedText {
    pub text: Option<String>,
    pub language_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHours {
    pub open_now: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_matches_provider_contract() {
        let center = Coordinate { lat: 40.1, lng: -75.2 };
        let body = serde_json::to_value(SearchTextRequest::food_assistance_near(center)).unwrap();

        assert_eq!(
            body,
            json!({
                "textQuery": "food pantry, food bank, soup kitchen, emergency food assistance",
                "maxResultCount": 20,
                "locationBias": {
                    "circle": {
                        "center": { "latitude": 40.1, "longitude": -75.2 },
                        "radius": 25000.0
                    }
                },
                "rankPreference": "DISTANCE"
            })
        );
    }

    #[test]
    fn empty_response_has_no_places() {
        let resp: SearchTextResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.places.is_empty());
    }

    #[test]
    fn parses_full_place() {
        let resp: SearchTextResponse = serde_json::from_value(json!({
            "places": [{
                "name": "places/abc",
                "displayName": { "text": "Pantry", "languageCode": "en" },
                "formattedAddress": "1 Elm St",
                "location": { "latitude": 1.0, "longitude": 2.0 },
                "regularOpeningHours": { "openNow": false },
                "rating": 4.5,
                "userRatingCount": 12,
                "websiteUri": "https://pantry.example",
                "googleMapsUri": "https://maps.example/abc"
            }]
        }))
        .unwrap();

        let place = &resp.places[0];
        assert_eq!(place.name.as_deref(), Some("places/abc"));
        assert_eq!(
            place.display_name.as_ref().and_then(|d| d.language_code.as_deref()),
            Some("en")
        );
        assert_eq!(place.regular_opening_hours.as_ref().and_then(|h| h.open_now), Some(false));
        assert_eq!(place.user_rating_count, Some(12));
    }

    #[test]
    fn field_mask_lists_every_modelled_field() {
        for field in [
            "name",
            "displayName",
            "formattedAddress",
            "location",
            "regularOpeningHours",
            "rating",
            "userRatingCount",
            "websiteUri",
            "googleMapsUri",
        ] {
            assert!(
                FIELD_MASK.split(',').any(|f| f == format!("places.{field}")),
                "missing {field}"
            );
        }
    }
}

//! The location search operation behind `POST /api/locator/search`.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::{Config, SecureString};
use crate::locator::{Coordinate, Place};
use crate::proxy::error::{LocatorError, COORDINATES_REQUIRED};
use crate::proxy::upstream::PlacesClient;

/// Success body: `{ "places": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResponse {
    pub places: Vec<Place>,
}

/// Stateless search service shared by all requests.
pub struct LocatorService {
    api_key: Option<SecureString>,
    reject_zero_coordinates: bool,
    places: PlacesClient,
}

impl LocatorService {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self {
            api_key: config.places.credential().cloned(),
            reject_zero_coordinates: config.validation.reject_zero_coordinates,
            places: PlacesClient::new(&config.places)?,
        })
    }

    /// Handle one raw request body.
    ///
    /// Checks run in order and short-circuit before any network I/O:
    /// credential, JSON syntax, coordinate presence, coordinate range.
    pub async fn search(&self, body: &[u8]) -> Result<SearchResponse, LocatorError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(LocatorError::missing_credential)?;

        let value: Value = serde_json::from_slice(body)
            .map_err(|e| LocatorError::Unexpected(format!("Malformed request body: {}", e)))?;

        let center = parse_coordinate(&value, self.reject_zero_coordinates)?;
        tracing::debug!(lat = center.lat, lng = center.lng, endpoint = self.places.endpoint(), "Searching places");

        let response = self.places.search_text(api_key, center).await?;
        let places: Vec<Place> = response
            .places
            .into_iter()
            .map(Place::from_provider)
            .collect();

        tracing::info!(count = places.len(), "Places search completed");
        Ok(SearchResponse { places })
    }
}

/// Extract `{ lat, lng }` from a request body.
///
/// With `reject_zero` set, a coordinate of exactly `0` counts as missing,
/// like `null`, `false`, or `""`.
pub fn parse_coordinate(body: &Value, reject_zero: bool) -> Result<Coordinate, LocatorError> {
    let empty = Map::new();
    let fields = body.as_object().unwrap_or(&empty);

    let lat = numeric_field(fields.get("lat"), reject_zero)?;
    let lng = numeric_field(fields.get("lng"), reject_zero)?;

    let (Some(lat), Some(lng)) = (lat, lng) else {
        return Err(LocatorError::Validation(COORDINATES_REQUIRED.to_string()));
    };

    Coordinate::new(lat, lng).map_err(|e| LocatorError::Validation(e.to_string()))
}

/// `Ok(None)` for an absent value, `Err` for a present value that is not a number.
fn numeric_field(value: Option<&Value>, reject_zero: bool) -> Result<Option<f64>, LocatorError> {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(v) if reject_zero && v == 0.0 => Ok(None),
            Some(v) => Ok(Some(v)),
            None => Ok(None),
        },
        Some(_) => Err(LocatorError::Validation(
            "Latitude and Longitude must be numbers.".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn required() -> String {
        COORDINATES_REQUIRED.to_string()
    }

    fn validation_message(result: Result<Coordinate, LocatorError>) -> String {
        match result {
            Err(LocatorError::Validation(msg)) => msg,
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn parses_valid_pair() {
        let c = parse_coordinate(&json!({ "lat": 40.7, "lng": -74.0 }), true).unwrap();
        assert_eq!(c, Coordinate { lat: 40.7, lng: -74.0 });
    }

    #[test]
    fn zero_latitude_is_rejected_by_default() {
        let msg = validation_message(parse_coordinate(&json!({ "lat": 0, "lng": -98 }), true));
        assert_eq!(msg, required());
    }

    #[test]
    fn zero_latitude_accepted_when_quirk_disabled() {
        let c = parse_coordinate(&json!({ "lat": 0, "lng": -98 }), false).unwrap();
        assert_eq!(c, Coordinate { lat: 0.0, lng: -98.0 });
    }

    #[test]
    fn missing_or_null_is_required() {
        for body in [
            json!({ "lat": 40.0 }),
            json!({ "lng": -75.0 }),
            json!({ "lat": null, "lng": -75.0 }),
            json!({}),
            json!([40.0, -75.0]),
            json!({ "lat": "", "lng": 1.0 }),
        ] {
            assert_eq!(validation_message(parse_coordinate(&body, false)), required());
        }
    }

    #[test]
    fn non_numeric_is_rejected() {
        let msg = validation_message(parse_coordinate(&json!({ "lat": "40", "lng": -75 }), true));
        assert_eq!(msg, "Latitude and Longitude must be numbers.");
    }

    #[test]
    fn out_of_range_is_rejected() {
        let msg = validation_message(parse_coordinate(&json!({ "lat": 91, "lng": 10 }), true));
        assert_eq!(msg, "Latitude must be between -90 and 90");

        let msg = validation_message(parse_coordinate(&json!({ "lat": 10, "lng": -181 }), true));
        assert_eq!(msg, "Longitude must be between -180 and 180");
    }

    #[tokio::test]
    async fn missing_credential_fails_before_parsing() {
        let service = LocatorService::new(&Config::default()).unwrap();
        let err = service.search(b"not json").await.unwrap_err();
        assert!(matches!(err, LocatorError::Configuration(_)));
    }

    #[tokio::test]
    async fn malformed_body_is_unexpected() {
        let mut config = Config::default();
        config.places.api_key = Some(SecureString::new("k"));
        let service = LocatorService::new(&config).unwrap();

        let err = service.search(b"{ lat: ").await.unwrap_err();
        assert!(matches!(err, LocatorError::Unexpected(_)));
        assert_eq!(err.public_message(), "Internal Server Error");
    }
}

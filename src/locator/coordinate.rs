//! Geographic coordinate type.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when constructing a [`Coordinate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    #[error("Latitude must be between -90 and 90")]
    LatitudeOutOfRange(f64),

    #[error("Longitude must be between -180 and 180")]
    LongitudeOutOfRange(f64),
}

/// A latitude/longitude pair identifying a point on Earth.
///
/// Serialized as `{ "lat": .., "lng": .. }`, the shape used both by the
/// search endpoint's responses and by the map camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// Create a validated coordinate.
    ///
    /// Non-finite values fall outside both ranges and are rejected as well.
    pub fn new(lat: f64, lng: f64) -> Result<Self, CoordinateError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoordinateError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(CoordinateError::LongitudeOutOfRange(lng));
        }
        Ok(Self { lat, lng })
    }

    /// Absolute per-axis distance in degrees: `(|Δlat|, |Δlng|)`.
    pub fn abs_delta(&self, other: &Coordinate) -> (f64, f64) {
        ((self.lat - other.lat).abs(), (self.lng - other.lng).abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_range_edges() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert!(Coordinate::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            Coordinate::new(90.5, 0.0),
            Err(CoordinateError::LatitudeOutOfRange(90.5))
        );
        assert_eq!(
            Coordinate::new(10.0, -180.1),
            Err(CoordinateError::LongitudeOutOfRange(-180.1))
        );
    }

    #[test]
    fn rejects_nan() {
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn abs_delta_is_symmetric() {
        let a = Coordinate::new(40.0, -75.0).unwrap();
        let b = Coordinate::new(40.5, -75.25).unwrap();
        assert_eq!(a.abs_delta(&b), b.abs_delta(&a));
        assert_eq!(a.abs_delta(&b), (0.5, 0.25));
    }

    #[test]
    fn serializes_as_lat_lng() {
        let json = serde_json::to_value(Coordinate { lat: 1.5, lng: -2.5 }).unwrap();
        assert_eq!(json, serde_json::json!({ "lat": 1.5, "lng": -2.5 }));
    }
}

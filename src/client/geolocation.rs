//! Device location capability.

use async_trait::async_trait;
use thiserror::Error;

use crate::locator::Coordinate;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeolocationError {
    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Position unavailable: {0}")]
    Unavailable(String),
}

/// A source of the user's current position.
///
/// Mirrors a browser's `getCurrentPosition`: one pending read at a time by
/// convention, no retry.
#[async_trait]
pub trait Geolocator: Send + Sync {
    /// Whether the device offers a location capability at all.
    fn is_supported(&self) -> bool {
        true
    }

    async fn current_position(&self) -> Result<Coordinate, GeolocationError>;
}

/// A position supplied up front, e.g. from the command line.
#[derive(Debug, Clone, Copy)]
pub struct FixedGeolocator {
    position: Coordinate,
}

impl FixedGeolocator {
    pub fn new(position: Coordinate) -> Self {
        Self { position }
    }
}

#[async_trait]
impl Geolocator for FixedGeolocator {
    async fn current_position(&self) -> Result<Coordinate, GeolocationError> {
        Ok(self.position)
    }
}

/// A device without location support.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGeolocation;

#[async_trait]
impl Geolocator for NoGeolocation {
    fn is_supported(&self) -> bool {
        false
    }

    async fn current_position(&self) -> Result<Coordinate, GeolocationError> {
        Err(GeolocationError::Unavailable("geolocation unsupported".to_string()))
    }
}

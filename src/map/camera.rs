//! Camera planning: where the map should look for a given search state.
//!
//! Pure functions; applying the plan to a surface is [`MapSync`](super::MapSync)'s job.

use std::time::Duration;

use crate::locator::{Coordinate, Place};

/// Geographic center of the contiguous United States.
pub const DEFAULT_CENTER: Coordinate = Coordinate {
    lat: 39.8283,
    lng: -98.5795,
};
pub const DEFAULT_ZOOM: f64 = 4.0;

/// Zoom used when only the user's position is known.
pub const USER_ZOOM: f64 = 14.0;

/// Selecting a place zooms in at least this far.
pub const SELECTION_MIN_ZOOM: f64 = 15.0;

/// Smallest half-span, in degrees, so colocated results still leave some map.
pub const MIN_DELTA_DEGREES: f64 = 0.005;

/// Extra room around the farthest result.
pub const FIT_PADDING: f64 = 1.15;

/// Wait before touching the camera after the inputs change.
pub const SETTLE_DELAY: Duration = Duration::from_millis(150);

/// Wait between fitting bounds and re-centering on the user.
pub const RECENTER_DELAY: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub center: Coordinate,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// Axis-aligned lat/lng box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    /// Box of half-spans `lat_delta`/`lng_delta` centered on `center`.
    pub fn around(center: Coordinate, lat_delta: f64, lng_delta: f64) -> Self {
        Self {
            south: center.lat - lat_delta,
            west: center.lng - lng_delta,
            north: center.lat + lat_delta,
            east: center.lng + lng_delta,
        }
    }

    pub fn center(&self) -> Coordinate {
        Coordinate {
            lat: (self.south + self.north) / 2.0,
            lng: (self.west + self.east) / 2.0,
        }
    }

    pub fn contains(&self, point: Coordinate) -> bool {
        (self.south..=self.north).contains(&point.lat) && (self.west..=self.east).contains(&point.lng)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraPlan {
    /// No results yet: look at the user up close.
    CenterOn(Camera),
    /// Fit `bounds`, then put `center` back in the middle.
    FitAround { bounds: Bounds, center: Coordinate },
}

/// Half-spans `(lat, lng)` of the box that keeps the user central and every
/// place visible: largest per-axis distance, floored, then padded.
pub fn padded_deltas(user: Coordinate, places: &[Place]) -> (f64, f64) {
    let (lat, lng) = places.iter().fold(
        (MIN_DELTA_DEGREES, MIN_DELTA_DEGREES),
        |(lat, lng), place| {
            let (d_lat, d_lng) = user.abs_delta(&place.location);
            (lat.max(d_lat), lng.max(d_lng))
        },
    );
    (lat * FIT_PADDING, lng * FIT_PADDING)
}

/// What the camera should do for the current user position and results.
///
/// `None` until the user's position is known.
pub fn plan_camera(user: Option<Coordinate>, places: &[Place]) -> Option<CameraPlan> {
    let user = user?;

    if places.is_empty() {
        return Some(CameraPlan::CenterOn(Camera {
            center: user,
            zoom: USER_ZOOM,
        }));
    }

    let (lat_delta, lng_delta) = padded_deltas(user, places);
    Some(CameraPlan::FitAround {
        bounds: Bounds::around(user, lat_delta, lng_delta),
        center: user,
    })
}

/// Camera after selecting a place: centered on it, never zooming out.
pub fn focus_camera(current: Camera, target: Coordinate) -> Camera {
    Camera {
        center: target,
        zoom: current.zoom.max(SELECTION_MIN_ZOOM),
    }
}

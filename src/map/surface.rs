//! Capability interface for the map rendering backend.

use crate::client::view::CardView;
use crate::locator::Coordinate;

use super::camera::{Bounds, Camera};

/// Invoked when the user clicks a marker.
pub type MarkerClick = Box<dyn Fn() + Send + Sync>;

/// Marker id used for the user's own position.
pub const USER_MARKER_ID: &str = "user-location";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    User,
    Place,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: String,
    pub kind: MarkerKind,
    pub position: Coordinate,
    pub title: String,
    /// Drawn with emphasis (e.g. bouncing) while selected.
    pub highlighted: bool,
}

/// Detail popup anchored at a place.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoOverlay {
    pub position: Coordinate,
    pub card: CardView,
}

/// What the synchronizer needs from a map widget. Implementations own the
/// actual rendering; nothing here knows which backend draws the map.
pub trait MapSurface: Send + 'static {
    fn camera(&self) -> Camera;

    fn set_camera(&mut self, camera: Camera);

    /// Move and zoom so that `bounds` is visible. The resulting center is
    /// backend-defined.
    fn fit_bounds(&mut self, bounds: Bounds);

    /// Adding an id that already exists replaces the old marker.
    fn add_marker(&mut self, marker: Marker, on_click: MarkerClick);

    fn remove_marker(&mut self, id: &str);

    fn show_info(&mut self, overlay: InfoOverlay);

    fn hide_info(&mut self);
}

//! In-memory map surface. Renders nothing; records what it was told.

use std::collections::BTreeMap;

use super::camera::{Bounds, Camera};
use super::surface::{InfoOverlay, MapSurface, Marker, MarkerClick};

const MAX_ZOOM: f64 = 21.0;

pub struct HeadlessSurface {
    camera: Camera,
    camera_history: Vec<Camera>,
    markers: BTreeMap<String, (Marker, MarkerClick)>,
    overlay: Option<InfoOverlay>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self {
            camera: Camera::default(),
            camera_history: Vec::new(),
            markers: BTreeMap::new(),
            overlay: None,
        }
    }

    /// Every camera the surface has been moved to, oldest first.
    pub fn camera_history(&self) -> &[Camera] {
        &self.camera_history
    }

    /// Markers in id order.
    pub fn markers(&self) -> Vec<&Marker> {
        self.markers.values().map(|(m, _)| m).collect()
    }

    pub fn marker(&self, id: &str) -> Option<&Marker> {
        self.markers.get(id).map(|(m, _)| m)
    }

    pub fn overlay(&self) -> Option<&InfoOverlay> {
        self.overlay.as_ref()
    }

    /// Simulate a click. Returns false when no such marker exists.
    pub fn click_marker(&self, id: &str) -> bool {
        match self.markers.get(id) {
            Some((_, on_click)) => {
                on_click();
                true
            }
            None => false,
        }
    }

    fn move_to(&mut self, camera: Camera) {
        self.camera = camera;
        self.camera_history.push(camera);
    }
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new()
    }
}

/// Web-mercator style zoom at which `degrees` of longitude fill one tile.
fn zoom_for_span(degrees: f64) -> f64 {
    if degrees <= 0.0 {
        return MAX_ZOOM;
    }
    (360.0 / degrees).log2().floor().clamp(0.0, MAX_ZOOM)
}

impl MapSurface for HeadlessSurface {
    fn camera(&self) -> Camera {
        self.camera
    }

    fn set_camera(&mut self, camera: Camera) {
        self.move_to(camera);
    }

    fn fit_bounds(&mut self, bounds: Bounds) {
        let span = (bounds.north - bounds.south).max(bounds.east - bounds.west);
        self.move_to(Camera {
            center: bounds.center(),
            zoom: zoom_for_span(span),
        });
    }

    fn add_marker(&mut self, marker: Marker, on_click: MarkerClick) {
        self.markers.insert(marker.id.clone(), (marker, on_click));
    }

    fn remove_marker(&mut self, id: &str) {
        self.markers.remove(id);
    }

    fn show_info(&mut self, overlay: InfoOverlay) {
        self.overlay = Some(overlay);
    }

    fn hide_info(&mut self) {
        self.overlay = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locator::Coordinate;
    use crate::map::surface::MarkerKind;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn zoom_for_span_is_bounded() {
        assert_eq!(zoom_for_span(360.0), 0.0);
        assert_eq!(zoom_for_span(0.0), MAX_ZOOM);
        assert_eq!(zoom_for_span(0.023), 13.0);
    }

    #[test]
    fn fit_bounds_centers_on_box() {
        let mut surface = HeadlessSurface::new();
        surface.fit_bounds(Bounds {
            south: 10.0,
            west: 20.0,
            north: 12.0,
            east: 24.0,
        });
        assert_eq!(surface.camera().center, Coordinate { lat: 11.0, lng: 22.0 });
        assert_eq!(surface.camera_history().len(), 1);
    }

    #[test]
    fn click_runs_callback() {
        let mut surface = HeadlessSurface::new();
        let clicks = Arc::new(AtomicUsize::new(0));
        let counter = clicks.clone();
        surface.add_marker(
            Marker {
                id: "m".into(),
                kind: MarkerKind::Place,
                position: Coordinate { lat: 0.0, lng: 0.0 },
                title: "m".into(),
                highlighted: false,
            },
            Box::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        assert!(surface.click_marker("m"));
        assert!(!surface.click_marker("missing"));
        assert_eq!(clicks.load(Ordering::SeqCst), 1);

        surface.remove_marker("m");
        assert!(surface.marker("m").is_none());
    }
}

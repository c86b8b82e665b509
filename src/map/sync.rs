//! Keeps a [`MapSurface`] in step with the search results and the selection.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::client::view::CardView;
use crate::client::Selection;
use crate::locator::{Coordinate, Place};

use super::camera::{focus_camera, plan_camera, Camera, CameraPlan, RECENTER_DELAY, SETTLE_DELAY};
use super::surface::{InfoOverlay, MapSurface, Marker, MarkerClick, MarkerKind, USER_MARKER_ID};

/// Map synchronizer.
///
/// Camera moves for new results are debounced by [`SETTLE_DELAY`]; a newer
/// update cancels a pending one. Selection moves apply immediately. Marker
/// clicks arrive as place ids on [`MapSync::next_click`].
///
/// Must be used from within a tokio runtime.
pub struct MapSync<S: MapSurface> {
    surface: Arc<Mutex<S>>,
    pending: Option<JoinHandle<()>>,
    marker_ids: Vec<String>,
    user: Option<Coordinate>,
    places: Vec<Place>,
    clicks_tx: mpsc::UnboundedSender<String>,
    clicks_rx: mpsc::UnboundedReceiver<String>,
}

impl<S: MapSurface> MapSync<S> {
    pub fn new(surface: S) -> Self {
        let (clicks_tx, clicks_rx) = mpsc::unbounded_channel();
        Self {
            surface: Arc::new(Mutex::new(surface)),
            pending: None,
            marker_ids: Vec::new(),
            user: None,
            places: Vec::new(),
            clicks_tx,
            clicks_rx,
        }
    }

    /// Shared handle to the underlying surface.
    pub fn surface(&self) -> Arc<Mutex<S>> {
        self.surface.clone()
    }

    /// New user position and/or results: redraw markers and schedule the camera.
    pub fn update(&mut self, user: Option<Coordinate>, places: &[Place], selection: &Selection) {
        self.user = user;
        self.places = places.to_vec();
        self.sync_markers(selection);
        self.schedule_camera(plan_camera(user, places));
    }

    /// Apply a selection change: pan and zoom to the place and open its
    /// overlay, or close the overlay when nothing is selected.
    pub fn select(&mut self, selection: &Selection) {
        self.sync_markers(selection);

        let place = selection
            .selected()
            .and_then(|id| self.places.iter().find(|p| p.has_id(id)));

        let mut surface = self.surface.lock();
        match place {
            Some(place) => {
                let camera = focus_camera(surface.camera(), place.location);
                surface.set_camera(camera);
                surface.show_info(InfoOverlay {
                    position: place.location,
                    card: CardView::from_place(place, true),
                });
            }
            None => surface.hide_info(),
        }
    }

    /// The info overlay was closed.
    pub fn clear_selection(&mut self) {
        self.select(&Selection::default());
    }

    /// Wait for the pending camera adjustment, if any, to finish.
    pub async fn settled(&mut self) {
        if let Some(handle) = self.pending.take() {
            if let Err(e) = handle.await {
                if !e.is_cancelled() {
                    tracing::error!("Camera task failed: {}", e);
                }
            }
        }
    }

    /// Next clicked place id.
    pub async fn next_click(&mut self) -> Option<String> {
        self.clicks_rx.recv().await
    }

    pub fn try_next_click(&mut self) -> Option<String> {
        self.clicks_rx.try_recv().ok()
    }

    fn sync_markers(&mut self, selection: &Selection) {
        let mut surface = self.surface.lock();
        for id in self.marker_ids.drain(..) {
            surface.remove_marker(&id);
        }

        if let Some(user) = self.user {
            surface.add_marker(
                Marker {
                    id: USER_MARKER_ID.to_string(),
                    kind: MarkerKind::User,
                    position: user,
                    title: "You are here".to_string(),
                    highlighted: false,
                },
                Box::new(|| {}),
            );
            self.marker_ids.push(USER_MARKER_ID.to_string());
        }

        for (index, place) in self.places.iter().enumerate() {
            let marker_id = place
                .id
                .clone()
                .unwrap_or_else(|| format!("unidentified-{}", index));
            let on_click: MarkerClick = match place.id.clone() {
                Some(place_id) => {
                    let tx = self.clicks_tx.clone();
                    Box::new(move || {
                        let _ = tx.send(place_id.clone());
                    })
                }
                None => Box::new(|| {}),
            };

            surface.add_marker(
                Marker {
                    id: marker_id.clone(),
                    kind: MarkerKind::Place,
                    position: place.location,
                    title: place.name.clone(),
                    highlighted: selection.is_selected(place),
                },
                on_click,
            );
            self.marker_ids.push(marker_id);
        }
    }

    fn schedule_camera(&mut self, plan: Option<CameraPlan>) {
        if let Some(previous) = self.pending.take() {
            previous.abort();
        }
        let Some(plan) = plan else {
            return;
        };

        let surface = self.surface.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(SETTLE_DELAY).await;
            match plan {
                CameraPlan::CenterOn(camera) => {
                    surface.lock().set_camera(camera);
                }
                CameraPlan::FitAround { bounds, center } => {
                    surface.lock().fit_bounds(bounds);
                    // Fitting may center on the box rather than the user.
                    tokio::time::sleep(RECENTER_DELAY).await;
                    let mut surface = surface.lock();
                    let zoom = surface.camera().zoom;
                    surface.set_camera(Camera { center, zoom });
                }
            }
        }));
    }
}

impl<S: MapSurface> Drop for MapSync<S> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

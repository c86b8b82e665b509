//! Event loop tying a [`MapSync`] to a [`SearchClient`].
//!
//! Results flow client → map, marker clicks flow map → client, and every
//! selection change, wherever it came from, is applied back to the map.

use tokio::sync::watch;

use crate::client::{Geolocator, SearchApi, SearchClient, SearchState, Selection};

use super::surface::MapSurface;
use super::sync::MapSync;

pub struct SelectionLink {
    state: watch::Receiver<SearchState>,
    selection: watch::Receiver<Selection>,
}

impl SelectionLink {
    /// Subscribe to the client. Changes made before this call are not replayed.
    pub fn new<G, A>(client: &SearchClient<G, A>) -> Self
    where
        G: Geolocator,
        A: SearchApi,
    {
        Self {
            state: client.subscribe(),
            selection: client.subscribe_selection(),
        }
    }

    /// Handle one pending event, waiting for one if none is ready.
    ///
    /// Search state is handled before selection, and selection before clicks,
    /// so a click is reflected on the map by the step after it is forwarded.
    /// Returns false once the client or the click channel is gone.
    pub async fn step<S, G, A>(&mut self, map: &mut MapSync<S>, client: &SearchClient<G, A>) -> bool
    where
        S: MapSurface,
        G: Geolocator,
        A: SearchApi,
    {
        tokio::select! {
            biased;

            changed = self.state.changed() => {
                if changed.is_err() {
                    return false;
                }
                let state = self.state.borrow_and_update().clone();
                let selection = self.selection.borrow().clone();
                map.update(state.user_location, &state.places, &selection);
            }

            changed = self.selection.changed() => {
                if changed.is_err() {
                    return false;
                }
                let selection = self.selection.borrow_and_update().clone();
                map.select(&selection);
            }

            click = map.next_click() => match click {
                Some(id) => {
                    tracing::debug!(place_id = %id, "Marker clicked");
                    client.select(id);
                }
                None => return false,
            },
        }
        true
    }

    /// Run until the client goes away.
    pub async fn run<S, G, A>(mut self, map: &mut MapSync<S>, client: &SearchClient<G, A>)
    where
        S: MapSurface,
        G: Geolocator,
        A: SearchApi,
    {
        while self.step(map, client).await {}
    }
}

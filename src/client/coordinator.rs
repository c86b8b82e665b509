//! Search Client: drives geolocation and the search endpoint, and publishes
//! state snapshots for the list and map views.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;

use crate::client::api::SearchApi;
use crate::client::geolocation::Geolocator;
use crate::client::mvi::Reducer;
use crate::client::search::{SearchIntent, SearchReducer, SearchState};
use crate::client::selection::{Selection, SelectionIntent, SelectionReducer};

/// Owns the search state and the selection cursor.
///
/// Each [`SearchClient::locate_me`] call takes a fresh sequence number, so a
/// slower earlier call cannot overwrite the outcome of a later one.
pub struct SearchClient<G, A> {
    geolocator: G,
    api: A,
    state: watch::Sender<SearchState>,
    selection: watch::Sender<Selection>,
    next_request: AtomicU64,
}

impl<G, A> SearchClient<G, A>
where
    G: Geolocator,
    A: SearchApi,
{
    pub fn new(geolocator: G, api: A) -> Self {
        let (state, _) = watch::channel(SearchState::default());
        let (selection, _) = watch::channel(Selection::default());
        Self {
            geolocator,
            api,
            state,
            selection,
            next_request: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> SearchState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    pub fn selection(&self) -> Selection {
        self.selection.borrow().clone()
    }

    pub fn subscribe_selection(&self) -> watch::Receiver<Selection> {
        self.selection.subscribe()
    }

    /// Read the device location, then search around it.
    ///
    /// Failures end up in `SearchState::error`; nothing is retried.
    pub async fn locate_me(&self) {
        let request = self.next_request.fetch_add(1, Ordering::SeqCst) + 1;

        if !self.geolocator.is_supported() {
            tracing::warn!(request, "Geolocation unsupported");
            self.dispatch(SearchIntent::GeolocationUnsupported { request });
            return;
        }

        self.dispatch(SearchIntent::LocateRequested { request });

        let coordinate = match self.geolocator.current_position().await {
            Ok(coordinate) => coordinate,
            Err(e) => {
                tracing::warn!(request, "Device location failed: {}", e);
                self.dispatch(SearchIntent::LocationDenied { request });
                return;
            }
        };
        self.dispatch(SearchIntent::LocationResolved {
            request,
            coordinate,
        });

        match self.api.search(coordinate).await {
            Ok(places) => {
                tracing::debug!(request, count = places.len(), "Search results received");
                self.dispatch(SearchIntent::ResultsLoaded { request, places });
            }
            Err(e) => {
                tracing::error!(request, "Locator error: {}", e);
                self.dispatch(SearchIntent::SearchFailed {
                    request,
                    message: e.user_message(),
                });
            }
        }
    }

    /// Point the cursor at a place. An empty id clears it.
    pub fn select(&self, id: impl Into<String>) {
        self.dispatch_selection(SelectionIntent::Select { id: id.into() });
    }

    pub fn clear_selection(&self) {
        self.dispatch_selection(SelectionIntent::Clear);
    }

    fn dispatch(&self, intent: SearchIntent) {
        self.state.send_modify(|state| {
            *state = SearchReducer::reduce(std::mem::take(state), intent);
        });
    }

    fn dispatch_selection(&self, intent: SelectionIntent) {
        self.selection.send_modify(|selection| {
            *selection = SelectionReducer::reduce(std::mem::take(selection), intent);
        });
    }
}

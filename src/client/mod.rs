//! Search Client: the client-side state coordinator.
//!
//! Uses MVI (Model-View-Intent):
//! - `search/` - search lifecycle state, intents, reducer
//! - `selection.rs` - the cursor shared by list and map
//! - `coordinator.rs` - async side effects around the reducers
//! - `view.rs` - list panel view models

pub mod api;
pub mod coordinator;
pub mod geolocation;
pub mod mvi;
pub mod search;
pub mod selection;
pub mod view;

pub use api::{HttpSearchApi, SearchApi, SearchApiError};
pub use coordinator::SearchClient;
pub use geolocation::{FixedGeolocator, GeolocationError, Geolocator, NoGeolocation};
pub use search::{SearchState, SearchStatus};
pub use selection::Selection;
pub use view::ResultsView;

//! Search lifecycle feature module.
//!
//! - `state.rs` - places, user location, loading flag, error, request sequence
//! - `intent.rs` - locate action and its async completions
//! - `reducer.rs` - state transitions (pure, stale completions dropped)

mod intent;
mod reducer;
mod state;

pub use intent::SearchIntent;
pub use reducer::{SearchReducer, GEOLOCATION_UNSUPPORTED, LOCATION_DENIED};
pub use state::{SearchState, SearchStatus};

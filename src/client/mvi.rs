//! Model-View-Intent primitives for the client side.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Reducers are pure; anything with side effects (geolocation, HTTP, map
//! camera moves) happens in the caller around the dispatch.

/// Marker trait for client state snapshots.
///
/// Snapshots are cloned out to views and compared to detect changes.
pub trait ViewState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for user actions and async completions fed to a reducer.
pub trait Intent: Send + 'static {}

/// The only place where state transitions happen: `(State, Intent) -> State`.
pub trait Reducer {
    type State: ViewState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

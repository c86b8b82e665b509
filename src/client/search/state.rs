//! State for one location search.

use crate::client::mvi::ViewState;
use crate::locator::{Coordinate, Place};

/// Coarse phase of the search, derived from [`SearchState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Idle,
    Loading,
    Success,
    Error,
}

/// The client's view of the current search.
///
/// Rebuilt per search: a successful response replaces `places` wholesale.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    /// Provider rank order, nearest first.
    pub places: Vec<Place>,
    pub user_location: Option<Coordinate>,
    pub loading: bool,
    pub error: Option<String>,
    /// Sequence number of the newest search; completions for older ones are dropped.
    pub request: u64,
}

impl ViewState for SearchState {}

impl SearchState {
    pub fn status(&self) -> SearchStatus {
        if self.loading {
            SearchStatus::Loading
        } else if self.error.is_some() {
            SearchStatus::Error
        } else if self.request == 0 {
            SearchStatus::Idle
        } else {
            SearchStatus::Success
        }
    }
}

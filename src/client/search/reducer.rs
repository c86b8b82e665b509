//! Reducer for the search lifecycle.

use crate::client::mvi::Reducer;

use super::intent::SearchIntent;
use super::state::SearchState;

pub const GEOLOCATION_UNSUPPORTED: &str = "Geolocation is not supported by your browser";
pub const LOCATION_DENIED: &str = "Location access denied. Please enable permissions.";

/// Search lifecycle transitions.
///
/// A new request (higher sequence number) supersedes whatever is in flight.
/// Completions whose sequence number is not the current one are stale and
/// leave the state untouched.
pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Intent = SearchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::GeolocationUnsupported { request } if request > state.request => {
                SearchState {
                    loading: false,
                    error: Some(GEOLOCATION_UNSUPPORTED.to_string()),
                    request,
                    ..state
                }
            }

            SearchIntent::LocateRequested { request } if request > state.request => SearchState {
                loading: true,
                error: None,
                request,
                ..state
            },

            SearchIntent::LocationResolved {
                request,
                coordinate,
            } if request == state.request => SearchState {
                user_location: Some(coordinate),
                ..state
            },

            SearchIntent::LocationDenied { request } if request == state.request => SearchState {
                loading: false,
                error: Some(LOCATION_DENIED.to_string()),
                ..state
            },

            SearchIntent::ResultsLoaded { request, places } if request == state.request => {
                SearchState {
                    places,
                    loading: false,
                    error: None,
                    ..state
                }
            }

            // Prior results stay in place on failure.
            SearchIntent::SearchFailed { request, message } if request == state.request => {
                SearchState {
                    loading: false,
                    error: Some(message),
                    ..state
                }
            }

            _ => state,
        }
    }
}

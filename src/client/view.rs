//! View models for the results panel.

use crate::client::search::SearchState;
use crate::client::selection::Selection;
use crate::locator::Place;

pub const LOCATE_LABEL: &str = "Use My Current Location";
pub const SCANNING_LABEL: &str = "Scanning Area...";
pub const EMPTY_HINT: &str = "Results will appear here based on your location.";

/// Everything the results panel renders, derived from state + selection.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub button_label: &'static str,
    pub button_disabled: bool,
    pub error: Option<String>,
    /// `"<n> Locations Found"`, only when there are results.
    pub header: Option<String>,
    /// Shown when there is nothing else to show.
    pub empty_hint: Option<&'static str>,
    pub cards: Vec<CardView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: Option<String>,
    pub name: String,
    pub address: String,
    /// `Open`/`Closed`, or nothing when the provider did not say.
    pub open_badge: Option<&'static str>,
    pub rating_line: Option<String>,
    pub directions_uri: Option<String>,
    pub website_uri: Option<String>,
    pub selected: bool,
}

impl ResultsView {
    pub fn from_state(state: &SearchState, selection: &Selection) -> Self {
        let header = (!state.places.is_empty())
            .then(|| format!("{} Locations Found", state.places.len()));

        let empty_hint = (state.places.is_empty() && !state.loading && state.error.is_none())
            .then_some(EMPTY_HINT);

        Self {
            button_label: if state.loading { SCANNING_LABEL } else { LOCATE_LABEL },
            button_disabled: state.loading,
            error: state.error.clone(),
            header,
            empty_hint,
            cards: state
                .places
                .iter()
                .map(|p| CardView::from_place(p, selection.is_selected(p)))
                .collect(),
        }
    }
}

impl CardView {
    pub fn from_place(place: &Place, selected: bool) -> Self {
        Self {
            id: place.id.clone(),
            name: place.name.clone(),
            address: place.formatted_address.clone(),
            open_badge: place.is_open_now.map(|open| if open { "Open" } else { "Closed" }),
            rating_line: rating_line(place),
            directions_uri: place.google_maps_uri.clone(),
            website_uri: place.website_uri.clone(),
            selected,
        }
    }
}

/// A zero rating means "not rated" and is hidden.
fn rating_line(place: &Place) -> Option<String> {
    let rating = place.rating.filter(|r| *r > 0.0)?;
    Some(match place.user_rating_count {
        Some(count) => format!("{} ({})", rating, count),
        None => rating.to_string(),
    })
}

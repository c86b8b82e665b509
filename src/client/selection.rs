//! Selection cursor shared by the result list and the map.

use crate::client::mvi::{Intent, Reducer, ViewState};
use crate::locator::Place;

/// Vertical gap kept above a card scrolled into view, in pixels.
pub const SCROLL_PADDING_PX: f64 = 12.0;

/// Id of the highlighted place, if any. A cursor, not an owner: it may name a
/// place that is no longer in the result list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection {
    selected: Option<String>,
}

impl ViewState for Selection {}

impl Selection {
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, place: &Place) -> bool {
        self.selected.as_deref().is_some_and(|id| place.has_id(id))
    }
}

#[derive(Debug, Clone)]
pub enum SelectionIntent {
    /// A card or marker was clicked. An empty id clears the cursor.
    Select { id: String },
    /// The info overlay was closed.
    Clear,
}

impl Intent for SelectionIntent {}

pub struct SelectionReducer;

impl Reducer for SelectionReducer {
    type State = Selection;
    type Intent = SelectionIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SelectionIntent::Select { id } if !id.is_empty() => Selection { selected: Some(id) },
            SelectionIntent::Select { .. } | SelectionIntent::Clear => Selection::default(),
        }
    }
}

/// Scroll position that brings a card to the top of the list container.
///
/// Positions are viewport-relative tops as reported by the layout engine;
/// only the list container scrolls, never the page.
pub fn scroll_offset(container_top: f64, card_top: f64, container_scroll_top: f64) -> f64 {
    card_top - container_top + container_scroll_top - SCROLL_PADDING_PX
}

//! Intents for the search lifecycle.

use crate::client::mvi::Intent;
use crate::locator::{Coordinate, Place};

/// Every intent carries the sequence number of the "locate me" action that
/// produced it.
#[derive(Debug, Clone)]
pub enum SearchIntent {
    /// The device has no geolocation capability. No network I/O follows.
    GeolocationUnsupported { request: u64 },

    /// User pressed "locate me"; the device location read has started.
    LocateRequested { request: u64 },

    /// The device reported its position; the proxy call is about to start.
    LocationResolved { request: u64, coordinate: Coordinate },

    /// The device location read was denied or failed.
    LocationDenied { request: u64 },

    /// The proxy returned results.
    ResultsLoaded { request: u64, places: Vec<Place> },

    /// The proxy call failed with a user-facing message.
    SearchFailed { request: u64, message: String },
}

impl Intent for SearchIntent {}

//! Credential handling.
//!
//! Provider keys are read once at startup (file, then environment) and kept
//! in a [`SecureString`] so they never end up in logs.

use serde::Deserialize;

use super::types::{Config, MapConfig, PlacesConfig};

/// Environment variable holding the server-side places-search key.
pub const PLACES_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";

/// Environment variable holding the key for the map rendering surface.
pub const MAP_KEY_ENV: &str = "GOOGLE_MAPS_BROWSER_KEY";

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

impl PlacesConfig {
    /// The places-search key, if one is set and non-blank.
    pub fn credential(&self) -> Option<&SecureString> {
        self.api_key.as_ref().filter(|k| !k.is_empty())
    }
}

impl MapConfig {
    /// The map surface key, if one is set and non-blank.
    pub fn credential(&self) -> Option<&SecureString> {
        self.browser_api_key.as_ref().filter(|k| !k.is_empty())
    }
}

impl Config {
    /// Overlay credentials from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Overlay credentials from an arbitrary lookup. Blank values are ignored
    /// so an empty variable cannot erase a key from the config file.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let from_env = |name: &str| {
            lookup(name)
                .map(SecureString::new)
                .filter(|k| !k.is_empty())
        };

        if let Some(key) = from_env(PLACES_KEY_ENV) {
            self.places.api_key = Some(key);
        }
        if let Some(key) = from_env(MAP_KEY_ENV) {
            self.map.browser_api_key = Some(key);
        }
        self
    }
}

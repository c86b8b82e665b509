//! Process configuration: TOML file plus environment credential overlay.

mod credentials;
mod loader;
mod types;

pub use credentials::{SecureString, MAP_KEY_ENV, PLACES_KEY_ENV};
pub use loader::ConfigError;
pub use types::{Config, MapConfig, PlacesConfig, ServerConfig, ValidationConfig};

use serde::Deserialize;

use super::credentials::SecureString;

/// Root configuration container.
///
/// Built once at process start and handed to the server and client by
/// reference; nothing reads the environment after that.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub places: PlacesConfig,
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
}

/// Local HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the locator server (host:port).
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

/// Places-search provider settings.
#[derive(Debug, Clone, Deserialize)]
pub struct PlacesConfig {
    /// Full URL of the `searchText` endpoint.
    #[serde(default = "default_places_endpoint")]
    pub endpoint: String,
    /// Server-side provider key. `None` means every search fails with 500.
    #[serde(default)]
    pub api_key: Option<SecureString>,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Map rendering surface settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MapConfig {
    /// Key for the map surface. Without it the map shows a setup placeholder.
    #[serde(default)]
    pub browser_api_key: Option<SecureString>,
}

/// Request validation knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationConfig {
    /// Treat a latitude or longitude of exactly `0` as missing.
    /// On by default; equatorial and prime-meridian searches are rejected.
    #[serde(default = "default_reject_zero")]
    pub reject_zero_coordinates: bool,
}

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_places_endpoint() -> String {
    "https://places.googleapis.com/v1/places:searchText".to_string()
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_reject_zero() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            endpoint: default_places_endpoint(),
            api_key: None,
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            reject_zero_coordinates: default_reject_zero(),
        }
    }
}

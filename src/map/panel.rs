use std::fmt::Display;

use crate::config::{MapConfig, SecureString, MAP_KEY_ENV};

use super::surface::MapSurface;
use super::sync::MapSync;

/// Placeholder content when the map cannot be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupNotice {
    pub title: String,
    pub hint: String,
}

/// The map area: a live synchronized map, or a placeholder explaining why
/// there is none.
pub enum MapPanel<S: MapSurface> {
    SetupRequired(SetupNotice),
    LoadFailed(SetupNotice),
    Live(MapSync<S>),
}

impl<S: MapSurface> MapPanel<S> {
    /// Build the surface only when a map key is configured. A surface that
    /// fails to initialize leaves the panel in [`MapPanel::LoadFailed`].
    pub fn mount<F, E>(config: &MapConfig, make_surface: F) -> Self
    where
        F: FnOnce(&SecureString) -> Result<S, E>,
        E: Display,
    {
        let Some(key) = config.credential() else {
            tracing::info!("Map key not configured; showing setup placeholder");
            return MapPanel::SetupRequired(SetupNotice {
                title: "Setup Required".to_string(),
                hint: format!(
                    "Set {} or map.browser_api_key in the config file to enable the map.",
                    MAP_KEY_ENV
                ),
            });
        };

        match make_surface(key) {
            Ok(surface) => MapPanel::Live(MapSync::new(surface)),
            Err(e) => {
                tracing::error!("Map surface failed to load: {}", e);
                MapPanel::LoadFailed(SetupNotice {
                    title: "Map Failed to Load".to_string(),
                    hint: e.to_string(),
                })
            }
        }
    }

    pub fn live(&mut self) -> Option<&mut MapSync<S>> {
        match self {
            MapPanel::Live(sync) => Some(sync),
            MapPanel::SetupRequired(_) | MapPanel::LoadFailed(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::HeadlessSurface;
    use std::convert::Infallible;

    #[test]
    fn missing_key_shows_placeholder() {
        let mut panel = MapPanel::mount(&MapConfig::default(), |_| {
            Ok::<_, Infallible>(HeadlessSurface::new())
        });
        assert!(panel.live().is_none());
        match panel {
            MapPanel::SetupRequired(notice) => {
                assert_eq!(notice.title, "Setup Required");
                assert!(notice.hint.contains(MAP_KEY_ENV));
            }
            _ => panic!("Expected setup placeholder"),
        }
    }

    #[test]
    fn key_mounts_live_map() {
        let config = MapConfig {
            browser_api_key: Some(SecureString::new("browser")),
        };
        let mut seen = None;
        let mut panel = MapPanel::mount(&config, |key| {
            seen = Some(key.expose().to_string());
            Ok::<_, Infallible>(HeadlessSurface::new())
        });
        assert!(panel.live().is_some());
        assert_eq!(seen.as_deref(), Some("browser"));
    }

    #[test]
    fn surface_error_shows_load_failure() {
        let config = MapConfig {
            browser_api_key: Some(SecureString::new("browser")),
        };
        let mut panel: MapPanel<HeadlessSurface> =
            MapPanel::mount(&config, |_| Err("RefererNotAllowedMapError"));
        assert!(panel.live().is_none());
        match panel {
            MapPanel::LoadFailed(notice) => {
                assert_eq!(notice.title, "Map Failed to Load");
                assert_eq!(notice.hint, "RefererNotAllowedMapError");
            }
            _ => panic!("Expected load failure"),
        }
    }
}

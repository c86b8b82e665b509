//! Map synchronization.
//!
//! - `camera.rs` - pure camera planning (fit, center, focus)
//! - `surface.rs` - capability trait for the rendering backend
//! - `sync.rs` - debounced controller applying plans to a surface
//! - `link.rs` - event loop between the synchronizer and the search client
//! - `panel.rs` - live map vs. setup or load-failure placeholder
//! - `headless.rs` - recording surface without a renderer

pub mod camera;
mod headless;
mod link;
mod panel;
pub mod surface;
mod sync;

pub use camera::{Bounds, Camera, CameraPlan};
pub use headless::HeadlessSurface;
pub use link::SelectionLink;
pub use panel::{MapPanel, SetupNotice};
pub use surface::{InfoOverlay, MapSurface, Marker, MarkerClick, MarkerKind, USER_MARKER_ID};
pub use sync::MapSync;

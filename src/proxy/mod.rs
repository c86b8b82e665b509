//! Search Proxy: the HTTP server that forwards a coordinate to the
//! places-search provider and returns normalized [`Place`](crate::locator::Place)s.

pub mod error;
pub mod health;
mod logging;
pub mod router;
pub mod search;
pub mod server;
pub mod shutdown;
pub mod upstream;

pub use error::LocatorError;
pub use logging::init_tracing;
pub use search::{LocatorService, SearchResponse};
pub use server::{ProxyHandle, ProxyServer, ServerError};

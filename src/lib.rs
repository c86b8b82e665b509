//! Emergency food locator: a places-search proxy, the client-side search
//! coordinator that consumes it, and the map synchronization glue.

pub mod client;
pub mod config;
pub mod locator;
pub mod map;
pub mod proxy;

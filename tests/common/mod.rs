//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_places;

use std::net::SocketAddr;
use std::time::Duration;

use hunger_locator::config::{Config, SecureString};
use hunger_locator::locator::{Coordinate, Place};
use hunger_locator::proxy::{ProxyHandle, ProxyServer};

/// Config pointing at `endpoint`, bound to a free port, with a test key.
pub fn test_config(endpoint: &str) -> Config {
    let mut config = Config::default();
    config.server.bind_addr = "127.0.0.1:0".to_string();
    config.places.endpoint = endpoint.to_string();
    config.places.api_key = Some(SecureString::new("test-key"));
    config
}

/// Start the locator server on an ephemeral port.
pub async fn spawn_server(config: &Config) -> (SocketAddr, ProxyHandle) {
    let mut server = ProxyServer::new(config).expect("server config");
    let addr = server.try_bind().await.expect("bind");
    let handle = server.handle();
    tokio::spawn(async move {
        let _ = server.run().await;
    });
    assert!(wait_for_server(addr, Duration::from_secs(2)).await);
    (addr, handle)
}

/// Wait for a server to become available.
pub async fn wait_for_server(addr: SocketAddr, timeout: Duration) -> bool {
    let start = std::time::Instant::now();
    while start.elapsed() < timeout {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    false
}

pub fn place(id: &str, lat: f64, lng: f64) -> Place {
    Place {
        id: Some(id.to_string()),
        name: format!("Pantry {}", id),
        formatted_address: "1 Main St".to_string(),
        location: Coordinate { lat, lng },
        is_open_now: None,
        rating: None,
        user_rating_count: None,
        website_uri: None,
        google_maps_uri: None,
    }
}

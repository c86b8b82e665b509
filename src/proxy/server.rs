use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::proxy::router::{build_router, RouterEngine};
use crate::proxy::search::LocatorService;
use crate::proxy::shutdown::ShutdownManager;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid bind address '{addr}': {source}")]
    InvalidAddress {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("Failed to build places client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("try_bind() must be called before run()")]
    NotBound,

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub struct ProxyServer {
    pub addr: SocketAddr,
    /// The bound listener, kept alive between try_bind() and run().
    listener: Option<TcpListener>,
    router: RouterEngine,
    shutdown: Arc<ShutdownManager>,
}

impl ProxyServer {
    pub fn new(config: &Config) -> Result<Self, ServerError> {
        let addr: SocketAddr =
            config
                .server
                .bind_addr
                .parse()
                .map_err(|source| ServerError::InvalidAddress {
                    addr: config.server.bind_addr.clone(),
                    source,
                })?;

        if config.places.credential().is_none() {
            tracing::warn!("Places API key is not configured; searches will fail with 500");
        }

        let router = RouterEngine::new(LocatorService::new(config)?);
        Ok(Self {
            addr,
            listener: None,
            router,
            shutdown: Arc::new(ShutdownManager::new()),
        })
    }

    /// Bind the configured address and keep the listener until [`ProxyServer::run`].
    ///
    /// Port `0` picks a free port; the actual address is returned.
    pub async fn try_bind(&mut self) -> Result<SocketAddr, ServerError> {
        let listener = TcpListener::bind(self.addr).await?;
        let actual = listener.local_addr()?;
        self.addr = actual;
        self.listener = Some(listener);
        tracing::info!("Locator server bound to {}", actual);
        Ok(actual)
    }

    pub fn handle(&self) -> ProxyHandle {
        ProxyHandle {
            shutdown: self.shutdown.clone(),
        }
    }

    /// Serve until shutdown is signalled.
    ///
    /// Consumes self to take ownership of the pre-bound listener.
    pub async fn run(self) -> Result<(), ServerError> {
        let listener = self.listener.ok_or(ServerError::NotBound)?;

        tracing::info!("Starting locator server on {}", self.addr);

        let app = build_router(self.router);
        let shutdown = self.shutdown.clone();
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                if let Err(e) = shutdown.wait_for_shutdown().await {
                    tracing::error!("Shutdown listener failed: {}", e);
                }
            })
            .into_future()
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

#[derive(Clone)]
pub struct ProxyHandle {
    shutdown: Arc<ShutdownManager>,
}

impl ProxyHandle {
    pub fn shutdown(&self) {
        self.shutdown.signal_shutdown();
    }
}

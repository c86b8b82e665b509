use tokio::signal;
use tokio::sync::watch;

/// Coordinates server shutdown from OS signals or a programmatic trigger.
///
/// Backed by a `watch` channel so a trigger that fires before anyone is
/// waiting is not lost.
pub struct ShutdownManager {
    tx: watch::Sender<bool>,
}

impl ShutdownManager {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx }
    }

    /// Resolve on Ctrl-C, SIGTERM (unix), or [`ShutdownManager::signal_shutdown`].
    pub async fn wait_for_shutdown(&self) -> Result<(), std::io::Error> {
        let mut rx = self.tx.subscribe();
        if *rx.borrow() {
            return Ok(());
        }

        #[cfg(unix)]
        {
            let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())?;
            tokio::select! {
                _ = signal::ctrl_c() => {},
                _ = sigterm.recv() => {},
                _ = rx.wait_for(|stop| *stop) => {},
            }
        }

        #[cfg(not(unix))]
        {
            tokio::select! {
                _ = signal::ctrl_c() => {},
                _ = rx.wait_for(|stop| *stop) => {},
            }
        }

        self.tx.send_replace(true);
        tracing::info!("Shutting down gracefully...");
        Ok(())
    }

    pub fn signal_shutdown(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_shutting_down(&self) -> bool {
        *self.tx.borrow()
    }
}

impl Default for ShutdownManager {
    fn default() -> Self {
        Self::new()
    }
}

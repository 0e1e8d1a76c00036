use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::signal;
use tokio::sync::watch;

/// Resolves on Ctrl+C, or SIGTERM on unix
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C"),
        _ = terminate => tracing::info!("Received SIGTERM"),
    }
}

/// Fans a single shutdown trigger out to the server and the grace timer
#[derive(Clone)]
pub struct ShutdownTrigger {
    fired: Arc<watch::Sender<bool>>,
}

impl ShutdownTrigger {
    pub fn new() -> Self {
        let (fired, _) = watch::channel(false);
        Self {
            fired: Arc::new(fired),
        }
    }

    /// Wait for `signal`, then mark the trigger as fired
    pub async fn fire_on<F: Future<Output = ()>>(self, signal: F) {
        signal.await;
        self.fired.send_replace(true);
    }

    /// Resolves `grace` after the trigger has fired
    pub async fn grace_elapsed(self, grace: Duration) {
        let mut rx = self.fired.subscribe();
        if rx.wait_for(|fired| *fired).await.is_err() {
            return std::future::pending().await;
        }
        tracing::info!("Draining in-flight requests for up to {:?}", grace);
        tokio::time::sleep(grace).await;
    }
}

impl Default for ShutdownTrigger {
    fn default() -> Self {
        Self::new()
    }
}

/// Drive `server` to completion, but give up `grace` after `trigger` fires.
///
/// Returns `true` when the server drained on its own.
pub async fn run_with_grace<S, E>(
    server: S,
    trigger: ShutdownTrigger,
    grace: Duration,
) -> Result<bool, E>
where
    S: Future<Output = Result<(), E>>,
{
    tokio::select! {
        result = server => result.map(|_| true),
        _ = trigger.grace_elapsed(grace) => {
            tracing::warn!("Shutdown grace period elapsed, abandoning in-flight requests");
            Ok(false)
        }
    }
}

//! Shutdown coordination for the scanner's background tasks.

use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time::Instant;

const DRAIN_POLL: Duration = Duration::from_millis(50);

/// Coordinator for graceful shutdown.
///
/// Background tasks (reload-on-signal loops) subscribe and exit when the
/// signal fires.
#[derive(Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Fire the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Number of tasks still listening.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Wait until every subscriber has dropped its receiver or `timeout`
    /// elapses. Returns how many tasks are still running.
    pub async fn drained(&self, timeout: Duration) -> usize {
        let deadline = Instant::now() + timeout;
        while self.receiver_count() > 0 && Instant::now() < deadline {
            tokio::time::sleep(DRAIN_POLL).await;
        }
        self.receiver_count()
    }

    /// Wait for Ctrl+C, then fire the shutdown signal.
    pub async fn trigger_on_ctrl_c(&self) -> std::io::Result<()> {
        tokio::signal::ctrl_c().await?;
        tracing::info!("Shutdown signal received");
        self.trigger();
        Ok(())
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_trigger_reaches_subscribers() {
        let shutdown = Shutdown::new();
        let mut rx = shutdown.subscribe();
        assert_eq!(shutdown.receiver_count(), 1);

        shutdown.trigger();
        assert!(rx.recv().await.is_ok());
    }

    #[tokio::test]
    async fn test_drained_after_tasks_exit() {
        let shutdown = Shutdown::new();
        let mut rx = shutdown.subscribe();
        tokio::spawn(async move {
            let _ = rx.recv().await;
        });

        shutdown.trigger();
        assert_eq!(shutdown.drained(Duration::from_secs(5)).await, 0);
    }

    #[tokio::test]
    async fn test_drained_times_out_on_stuck_task() {
        let shutdown = Shutdown::new();
        let _stuck = shutdown.subscribe();

        shutdown.trigger();
        assert_eq!(shutdown.drained(Duration::from_millis(100)).await, 1);
    }
}

//! Graceful stop for the HTTP service.
//!
//! `startup::serve` hands one receiver to `HttpServer::run`, and the signal task
//! fires the trigger. Tests use the same handle to stop a server they booted.

use tokio::sync::broadcast;

/// One-shot stop switch shared by the signal task and the server.
#[derive(Debug)]
pub struct Shutdown {
    notify: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (notify, _) = broadcast::channel(1);
        Self { notify }
    }

    /// Receiver that resolves once `trigger` is called.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.notify.subscribe()
    }

    /// Ask every subscribed server to stop accepting and drain.
    /// A no-op when nothing is subscribed.
    pub fn trigger(&self) {
        if self.notify.send(()).is_err() {
            tracing::debug!("Shutdown triggered with no running server");
        }
    }

    /// Servers still waiting for the stop signal.
    pub fn receiver_count(&self) -> usize {
        self.notify.receiver_count()
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
        let mut server = shutdown.subscribe();
        let mut other = shutdown.subscribe();
        assert_eq!(shutdown.receiver_count(), 2);

        shutdown.trigger();
        assert!(server.recv().await.is_ok());
        assert!(other.recv().await.is_ok());
    }

    #[test]
    fn test_trigger_without_server() {
        let shutdown = Shutdown::default();
        shutdown.trigger();
        assert_eq!(shutdown.receiver_count(), 0);
    }

    #[tokio::test]
    async fn test_dropped_receiver_not_counted() {
        let shutdown = Shutdown::new();
        let server = shutdown.subscribe();
        drop(server);
        assert_eq!(shutdown.receiver_count(), 0);
    }
}

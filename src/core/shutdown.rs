//! Cancellation token for the tick loop.
//!
//! [`channel`] returns a [`ShutdownTrigger`] held by whoever decides the run
//! is over and a [`Shutdown`] handed to the loop. Cloned listeners all
//! observe the same trigger.

use tokio::sync::watch;

#[derive(Debug)]
pub struct ShutdownTrigger {
    tx: watch::Sender<bool>,
}

#[derive(Debug, Clone)]
pub struct Shutdown {
    rx: watch::Receiver<bool>,
}

pub fn channel() -> (ShutdownTrigger, Shutdown) {
    let (tx, rx) = watch::channel(false);
    (ShutdownTrigger { tx }, Shutdown { rx })
}

impl ShutdownTrigger {
    /// Fires the token. Calling it again has no further effect.
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }
}

impl Shutdown {
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once the trigger fires. Never resolves if the trigger is
    /// dropped without firing.
    pub async fn cancelled(&mut self) {
        if self.rx.wait_for(|cancelled| *cancelled).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_trigger_wakes_listener() {
        let (trigger, mut shutdown) = channel();
        assert!(!shutdown.is_cancelled());

        trigger.trigger();
        trigger.trigger();

        shutdown.cancelled().await;
        assert!(shutdown.is_cancelled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_trigger_never_cancels() {
        let (trigger, mut shutdown) = channel();
        drop(trigger);

        let waited = tokio::time::timeout(Duration::from_secs(5), shutdown.cancelled()).await;
        assert!(waited.is_err());
        assert!(!shutdown.is_cancelled());
    }
}

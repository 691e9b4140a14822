use crate::domain::model::TimeOfDay;
use crate::domain::ports::{Interrupt, TimeSource};

/// Host wall clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> TimeOfDay {
        TimeOfDay::from_timelike(&chrono::Local::now())
    }
}

/// Ctrl+C from the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct CtrlC;

impl Interrupt for CtrlC {
    async fn wait(&self) {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("⚠️ Cannot listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

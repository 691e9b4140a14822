use crate::core::clock::ClockState;
use crate::core::shutdown::Shutdown;
use crate::domain::ports::DisplaySink;
use crate::utils::error::Result;
use std::time::Duration;
use tokio::time::{self, MissedTickBehavior};

/// What a finished run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOutcome {
    pub ticks: u64,
    pub alarms_fired: u64,
}

/// Drives a [`ClockState`] one tick at a time until told to stop.
#[derive(Debug, Clone)]
pub struct ClockRunner {
    tick: Duration,
    alarm_hold: Duration,
}

impl ClockRunner {
    /// `tick` is raised to at least one millisecond; tokio intervals
    /// cannot be zero.
    pub fn new(tick: Duration, alarm_hold: Duration) -> Self {
        Self {
            tick: tick.max(Duration::from_millis(1)),
            alarm_hold,
        }
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }

    /// Each tick: draw, check the alarm, wait, advance.
    ///
    /// Cancellation is only observed while waiting, before `advance`, so
    /// the state is always left on a whole tick. When the alarm fires the
    /// banner stays up for the hold period and the clock is not advanced
    /// during it.
    pub async fn run<S: DisplaySink>(
        &self,
        state: &mut ClockState,
        sink: &mut S,
        mut shutdown: Shutdown,
    ) -> Result<RunOutcome> {
        let mut outcome = RunOutcome::default();
        let mut ticker = time::interval(self.tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick of an interval completes immediately.
        ticker.tick().await;

        tracing::info!(
            tick_ms = self.tick.as_millis() as u64,
            start = %state.time(),
            "▶️ Clock started"
        );

        loop {
            sink.show_tick(&state.snapshot())?;

            if state.check_alarm() {
                outcome.alarms_fired += 1;
                let fired_at = state.time();
                sink.show_alarm(fired_at)?;

                if !self.alarm_hold.is_zero() {
                    tokio::select! {
                        biased;
                        _ = shutdown.cancelled() => break,
                        _ = time::sleep(self.alarm_hold) => {}
                    }
                    ticker.reset();
                }
            }

            tokio::select! {
                biased;
                _ = shutdown.cancelled() => break,
                _ = ticker.tick() => {}
            }

            state.advance();
            outcome.ticks += 1;
        }

        tracing::info!(
            ticks = outcome.ticks,
            alarms = outcome.alarms_fired,
            now = %state.time(),
            "⏹️ Clock stopped"
        );
        Ok(outcome)
    }
}

impl Default for ClockRunner {
    fn default() -> Self {
        Self::new(Duration::from_secs(1), Duration::from_secs(30))
    }
}

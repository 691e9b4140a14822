use crate::domain::model::{AlarmArmed, ClockSnapshot, DisplayMode, TimeOfDay};
use crate::utils::error::ValidationError;

/// The whole mutable state of the clock: current time, optional alarm,
/// display mode and pause flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockState {
    time: TimeOfDay,
    alarm: Option<TimeOfDay>,
    mode: DisplayMode,
    paused: bool,
}

impl ClockState {
    pub fn new(time: TimeOfDay) -> Self {
        Self {
            time,
            alarm: None,
            mode: DisplayMode::default(),
            paused: false,
        }
    }

    pub fn time(&self) -> TimeOfDay {
        self.time
    }

    pub fn alarm(&self) -> Option<TimeOfDay> {
        self.alarm
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Replaces the current time. On error nothing changes.
    pub fn set_time(&mut self, hours: i64, minutes: i64, seconds: i64) -> Result<(), ValidationError> {
        self.time = TimeOfDay::new(hours, minutes, seconds)?;
        tracing::debug!("Time set to {}", self.time);
        Ok(())
    }

    /// Arms the alarm, replacing any alarm already armed.
    pub fn set_alarm(
        &mut self,
        hours: i64,
        minutes: i64,
        seconds: i64,
    ) -> Result<AlarmArmed, ValidationError> {
        let at = TimeOfDay::new(hours, minutes, seconds)?;
        Ok(self.arm(at))
    }

    /// Arms an already validated alarm time.
    pub fn arm(&mut self, at: TimeOfDay) -> AlarmArmed {
        self.alarm = Some(at);
        tracing::info!("⏰ Alarm armed for {}", at);
        AlarmArmed { at }
    }

    /// Returns true exactly once per armed alarm: when the current time
    /// equals it. The alarm is disarmed as it fires.
    pub fn check_alarm(&mut self) -> bool {
        match self.alarm {
            Some(at) if at == self.time => {
                self.alarm = None;
                tracing::info!("🔔 Alarm fired at {}", at);
                true
            }
            _ => false,
        }
    }

    /// Moves the clock forward by one second unless paused.
    pub fn advance(&mut self) {
        if self.paused {
            return;
        }
        self.time = self.time.next_second();
    }

    pub fn toggle_mode(&mut self) -> DisplayMode {
        self.mode = self.mode.toggled();
        tracing::debug!("Display mode is now {}", self.mode);
        self.mode
    }

    pub fn set_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
    }

    /// Returns true when the clock is now paused.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        tracing::debug!(paused = self.paused, "Pause toggled");
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn format(&self, mode: DisplayMode) -> String {
        self.time.format(mode)
    }

    /// Current time in the current display mode.
    pub fn display(&self) -> String {
        self.format(self.mode)
    }

    pub fn snapshot(&self) -> ClockSnapshot {
        ClockSnapshot {
            time: self.time,
            alarm: self.alarm,
            mode: self.mode,
            paused: self.paused,
        }
    }
}

impl Default for ClockState {
    fn default() -> Self {
        Self::new(TimeOfDay::MIDNIGHT)
    }
}

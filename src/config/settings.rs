use crate::config::toml_config::TomlConfig;
use crate::core::clock::ClockState;
use crate::core::runner::ClockRunner;
use crate::domain::model::{DisplayMode, TimeOfDay};
use crate::domain::ports::TimeSource;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::time::Duration;

pub const DEFAULT_TITLE: &str = "Terminal Clock";
pub const DEFAULT_ALARM_MESSAGE: &str = "WAKE UP! It's time to wake up!";

/// Fully resolved settings after merging defaults, the config file and the
/// command line.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockSettings {
    pub title: String,
    /// `None` means seed from the host wall clock.
    pub start_time: Option<TimeOfDay>,
    pub mode: DisplayMode,
    pub start_paused: bool,
    pub tick_interval: Duration,
    pub alarm: Option<TimeOfDay>,
    pub alarm_hold: Duration,
    pub alarm_message: String,
    pub clear_screen: bool,
    pub message_pause: Duration,
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            start_time: None,
            mode: DisplayMode::Hour24,
            start_paused: false,
            tick_interval: Duration::from_secs(1),
            alarm: None,
            alarm_hold: Duration::from_secs(30),
            alarm_message: DEFAULT_ALARM_MESSAGE.to_string(),
            clear_screen: true,
            message_pause: Duration::from_secs(1),
        }
    }
}

impl ClockSettings {
    /// Layers a validated config file over the defaults.
    pub fn from_toml(config: &TomlConfig) -> Result<Self> {
        config.validate()?;

        let mut settings = Self::default();
        if let Some(title) = &config.clock.title {
            settings.title = title.clone();
        }
        settings.start_time = config.start_time()?;
        if let Some(mode) = config.mode()? {
            settings.mode = mode;
        }
        if let Some(paused) = config.clock.start_paused {
            settings.start_paused = paused;
        }
        if let Some(ms) = config.clock.tick_interval_ms {
            settings.tick_interval = Duration::from_millis(ms);
        }
        settings.alarm = config.alarm_time()?;
        if let Some(secs) = config.alarm.hold_seconds {
            settings.alarm_hold = Duration::from_secs(secs);
        }
        if let Some(message) = &config.alarm.message {
            settings.alarm_message = message.clone();
        }
        if let Some(clear) = config.display.clear_screen {
            settings.clear_screen = clear;
        }
        if let Some(ms) = config.display.message_pause_ms {
            settings.message_pause = Duration::from_millis(ms);
        }
        Ok(settings)
    }

    /// Builds the starting state. An explicit start time wins over the
    /// time source.
    pub fn initial_state<T: TimeSource>(&self, source: &T) -> ClockState {
        let start = self.start_time.unwrap_or_else(|| source.now());
        let mut state = ClockState::new(start);
        state.set_mode(self.mode);
        state.set_paused(self.start_paused);
        if let Some(alarm) = self.alarm {
            state.arm(alarm);
        }
        state
    }

    pub fn runner(&self) -> ClockRunner {
        ClockRunner::new(self.tick_interval, self.alarm_hold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedTime(TimeOfDay);

    impl TimeSource for FixedTime {
        fn now(&self) -> TimeOfDay {
            self.0
        }
    }

    #[test]
    fn test_defaults_seed_from_time_source() {
        let settings = ClockSettings::default();
        let source = FixedTime(TimeOfDay::new(9, 41, 0).unwrap());

        let state = settings.initial_state(&source);
        assert_eq!(state.time().as_tuple(), (9, 41, 0));
        assert_eq!(state.mode(), DisplayMode::Hour24);
        assert!(!state.is_paused());
        assert!(state.alarm().is_none());
    }

    #[test]
    fn test_configured_start_time_wins() {
        let config = TomlConfig::from_toml_str(
            r#"
[clock]
start_time = "16:30:00"
mode = "12h"
start_paused = true

[alarm]
time = "16:30:10"
"#,
        )
        .unwrap();

        let settings = ClockSettings::from_toml(&config).unwrap();
        let state = settings.initial_state(&FixedTime(TimeOfDay::MIDNIGHT));

        assert_eq!(state.time().as_tuple(), (16, 30, 0));
        assert_eq!(state.mode(), DisplayMode::Hour12);
        assert!(state.is_paused());
        assert_eq!(state.alarm().map(|a| a.as_tuple()), Some((16, 30, 10)));
    }

    #[test]
    fn test_from_toml_rejects_invalid_config() {
        let config = TomlConfig::from_toml_str("[alarm]\ntime = \"7:61\"\n").unwrap();
        assert!(ClockSettings::from_toml(&config).is_err());
    }

    #[test]
    fn test_runner_uses_tick_interval() {
        let config = TomlConfig::from_toml_str("[clock]\ntick_interval_ms = 250\n").unwrap();
        let settings = ClockSettings::from_toml(&config).unwrap();
        assert_eq!(settings.runner().tick(), Duration::from_millis(250));
    }
}

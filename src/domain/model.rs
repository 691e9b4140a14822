use crate::utils::error::{ClockError, ValidationError};
use chrono::Timelike;
use std::fmt;
use std::str::FromStr;

/// Which component of a time-of-day a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Hours,
    Minutes,
    Seconds,
}

impl TimeField {
    /// Inclusive valid range for this field.
    pub fn range(self) -> (u8, u8) {
        match self {
            TimeField::Hours => (0, 23),
            TimeField::Minutes | TimeField::Seconds => (0, 59),
        }
    }

    fn check(self, value: i64) -> Result<u8, ValidationError> {
        let (min, max) = self.range();
        if value < i64::from(min) || value > i64::from(max) {
            return Err(ValidationError::new(self, value));
        }
        Ok(value as u8)
    }
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeField::Hours => "hours",
            TimeField::Minutes => "minutes",
            TimeField::Seconds => "seconds",
        };
        f.write_str(name)
    }
}

/// A wall-clock time within a single day.
///
/// Fields are private so a value outside `00:00:00..=23:59:59` can never be
/// built; every constructor goes through range validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Validates hours, then minutes, then seconds, reporting the first
    /// field that is out of range.
    pub fn new(hours: i64, minutes: i64, seconds: i64) -> Result<Self, ValidationError> {
        Ok(Self {
            hours: TimeField::Hours.check(hours)?,
            minutes: TimeField::Minutes.check(minutes)?,
            seconds: TimeField::Seconds.check(seconds)?,
        })
    }

    /// Reads hour, minute and second from any chrono time value.
    pub fn from_timelike<T: Timelike>(t: &T) -> Self {
        // chrono keeps leap seconds in the nanosecond part, so second() is already 0..=59
        Self {
            hours: t.hour().min(23) as u8,
            minutes: t.minute().min(59) as u8,
            seconds: t.second().min(59) as u8,
        }
    }

    pub fn hours(&self) -> u8 {
        self.hours
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    pub fn as_tuple(&self) -> (u8, u8, u8) {
        (self.hours, self.minutes, self.seconds)
    }

    /// The time one second later, wrapping from 23:59:59 to 00:00:00.
    pub fn next_second(self) -> Self {
        let Self {
            mut hours,
            mut minutes,
            mut seconds,
        } = self;

        seconds += 1;
        if seconds >= 60 {
            seconds = 0;
            minutes += 1;
            if minutes >= 60 {
                minutes = 0;
                hours += 1;
                if hours >= 24 {
                    hours = 0;
                }
            }
        }

        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Zero-padded `HH:MM:SS` in 24h mode, `hh:mm:ss AM|PM` in 12h mode.
    pub fn format(&self, mode: DisplayMode) -> String {
        match mode {
            DisplayMode::Hour24 => {
                format!("{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
            }
            DisplayMode::Hour12 => {
                let (hour, period) = match self.hours {
                    0 => (12, "AM"),
                    h @ 1..=11 => (h, "AM"),
                    12 => (12, "PM"),
                    h => (h - 12, "PM"),
                };
                format!(
                    "{:02}:{:02}:{:02} {}",
                    hour, self.minutes, self.seconds, period
                )
            }
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(DisplayMode::Hour24))
    }
}

/// Accepts `HH:MM:SS` or `HH:MM`.
impl FromStr for TimeOfDay {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_error = || ClockError::TimeFormatError {
            input: s.to_string(),
        };

        let parts = s
            .trim()
            .split(':')
            .map(|p| p.trim().parse::<i64>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| format_error())?;

        let time = match parts.as_slice() {
            [h, m] => TimeOfDay::new(*h, *m, 0)?,
            [h, m, s] => TimeOfDay::new(*h, *m, *s)?,
            _ => return Err(format_error()),
        };
        Ok(time)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Hour24,
    Hour12,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Hour24 => DisplayMode::Hour12,
            DisplayMode::Hour12 => DisplayMode::Hour24,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::Hour24 => "24h",
            DisplayMode::Hour12 => "12h",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DisplayMode {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "24h" | "24" => Ok(DisplayMode::Hour24),
            "12h" | "12" => Ok(DisplayMode::Hour12),
            other => Err(ClockError::InvalidConfigValueError {
                field: "mode".to_string(),
                value: other.to_string(),
                reason: "expected '24h' or '12h'".to_string(),
            }),
        }
    }
}

/// Read-only view of the clock handed to display sinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSnapshot {
    pub time: TimeOfDay,
    pub alarm: Option<TimeOfDay>,
    pub mode: DisplayMode,
    pub paused: bool,
}

impl ClockSnapshot {
    pub fn formatted_time(&self) -> String {
        self.time.format(self.mode)
    }
}

/// Emitted when an alarm is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlarmArmed {
    pub at: TimeOfDay,
}

impl fmt::Display for AlarmArmed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Alarm set for {}", self.at)
    }
}

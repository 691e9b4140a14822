use crate::domain::model::TimeField;
use thiserror::Error;

/// A time field fell outside its valid range.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{field} must be between {min} and {max} (got {value})")]
pub struct ValidationError {
    pub field: TimeField,
    pub value: i64,
    pub min: u8,
    pub max: u8,
}

impl ValidationError {
    pub fn new(field: TimeField, value: i64) -> Self {
        let (min, max) = field.range();
        Self {
            field,
            value,
            min,
            max,
        }
    }
}

#[derive(Error, Debug)]
pub enum ClockError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid time: {0}")]
    InvalidTime(#[from] ValidationError),

    #[error("Cannot parse time '{input}': expected HH:MM:SS")]
    TimeFormatError { input: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ClockError {
    /// Short text suitable for showing to the person at the terminal.
    pub fn user_friendly_message(&self) -> String {
        match self {
            ClockError::IoError(e) => format!("Terminal I/O failed: {}", e),
            ClockError::InvalidTime(e) => format!("Error: {}", e),
            ClockError::TimeFormatError { input } => {
                format!("'{}' is not a valid time", input)
            }
            ClockError::ConfigError { message } => format!("Configuration problem: {}", message),
            ClockError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ClockError::IoError(_) => "Check that the terminal is still attached and writable",
            ClockError::InvalidTime(_) => {
                "Hours go from 0 to 23, minutes and seconds from 0 to 59"
            }
            ClockError::TimeFormatError { .. } => "Write times as HH:MM:SS, for example 07:30:00",
            ClockError::ConfigError { .. } => {
                "Make sure the config file exists and is valid TOML"
            }
            ClockError::InvalidConfigValueError { .. } => {
                "Fix the value in the config file or override it on the command line"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ClockError>;

pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{CtrlC, SystemClock, TerminalSink};
pub use app::Session;
pub use config::ClockSettings;
pub use crate::core::clock::ClockState;
pub use crate::core::runner::{ClockRunner, RunOutcome};
pub use domain::model::{AlarmArmed, ClockSnapshot, DisplayMode, TimeField, TimeOfDay};
pub use utils::error::{ClockError, Result, ValidationError};

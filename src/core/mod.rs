pub mod clock;
pub mod runner;
pub mod shutdown;

pub use crate::domain::model::{AlarmArmed, ClockSnapshot, DisplayMode, TimeOfDay};
pub use crate::domain::ports::{DisplaySink, Interrupt, TimeSource};
pub use crate::utils::error::Result;

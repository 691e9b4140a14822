use crate::domain::model::{ClockSnapshot, TimeOfDay};
use crate::utils::error::Result;

/// Where the running clock draws itself.
pub trait DisplaySink {
    fn show_tick(&mut self, snapshot: &ClockSnapshot) -> Result<()>;
    fn show_alarm(&mut self, alarm: TimeOfDay) -> Result<()>;
}

/// Source for the initial time when none is configured.
pub trait TimeSource {
    fn now(&self) -> TimeOfDay;
}

/// Signal that asks a running clock to hand control back to the menu.
pub trait Interrupt {
    fn wait(&self) -> impl std::future::Future<Output = ()> + Send;
}

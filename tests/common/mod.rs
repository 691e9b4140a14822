#![allow(dead_code)]

use std::time::Duration;
use terminal_clock::core::{DisplaySink, Interrupt};
use terminal_clock::{ClockSnapshot, Result, TimeOfDay};

/// Keeps everything the clock tried to draw.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub ticks: Vec<ClockSnapshot>,
    pub alarms: Vec<TimeOfDay>,
}

impl DisplaySink for RecordingSink {
    fn show_tick(&mut self, snapshot: &ClockSnapshot) -> Result<()> {
        self.ticks.push(*snapshot);
        Ok(())
    }

    fn show_alarm(&mut self, alarm: TimeOfDay) -> Result<()> {
        self.alarms.push(alarm);
        Ok(())
    }
}

/// Fires a fixed delay after each wait starts.
pub struct AfterDelay(pub Duration);

impl Interrupt for AfterDelay {
    async fn wait(&self) {
        tokio::time::sleep(self.0).await;
    }
}

pub struct Never;

impl Interrupt for Never {
    async fn wait(&self) {
        std::future::pending::<()>().await;
    }
}

pub fn time(h: i64, m: i64, s: i64) -> TimeOfDay {
    TimeOfDay::new(h, m, s).unwrap()
}

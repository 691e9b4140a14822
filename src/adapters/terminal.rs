use crate::domain::model::{ClockSnapshot, DisplayMode, TimeOfDay};
use crate::domain::ports::DisplaySink;
use crate::utils::error::Result;
use std::io::{self, Write};

pub const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";
const BANNER_WIDTH: usize = 50;

/// Draws the clock as a full screen of text on any writer.
pub struct TerminalSink<W: Write> {
    out: W,
    title: String,
    alarm_message: String,
    clear_screen: bool,
}

impl TerminalSink<io::Stdout> {
    pub fn stdout(title: impl Into<String>, alarm_message: impl Into<String>) -> Self {
        Self::new(io::stdout(), title, alarm_message)
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W, title: impl Into<String>, alarm_message: impl Into<String>) -> Self {
        Self {
            out,
            title: title.into(),
            alarm_message: alarm_message.into(),
            clear_screen: true,
        }
    }

    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySink for TerminalSink<W> {
    fn show_tick(&mut self, snapshot: &ClockSnapshot) -> Result<()> {
        if self.clear_screen {
            write!(self.out, "{}", CLEAR_SCREEN)?;
        }

        writeln!(self.out, "\n    {}\n", self.title)?;
        writeln!(self.out, "        {}", snapshot.formatted_time())?;
        let mode_line = match snapshot.mode {
            DisplayMode::Hour24 => "(24h mode)",
            DisplayMode::Hour12 => "(12h mode)",
        };
        writeln!(self.out, "        {}\n", mode_line)?;

        if snapshot.paused {
            writeln!(self.out, "        [PAUSED]\n")?;
        }

        if let Some(alarm) = snapshot.alarm {
            writeln!(self.out, "        Alarm set: {}\n", alarm)?;
        }

        writeln!(self.out, "    Press Ctrl+C to open menu")?;
        self.out.flush()?;
        Ok(())
    }

    fn show_alarm(&mut self, alarm: TimeOfDay) -> Result<()> {
        let rule = "=".repeat(BANNER_WIDTH);
        writeln!(self.out, "\n{}", rule)?;
        writeln!(self.out, "        {}", self.alarm_message)?;
        writeln!(self.out, "        It's {}!", alarm)?;
        writeln!(self.out, "{}\n", rule)?;
        self.out.flush()?;
        Ok(())
    }
}

//! Interactive menu loop around a [`ClockState`].
//!
//! The session reads menu choices line by line, applies them to the clock,
//! and hands the clock to a [`ClockRunner`] when the user starts it. An
//! [`Interrupt`] stops the running clock and returns to the menu; while the
//! menu is waiting for input the same interrupt ends the session.

use crate::adapters::terminal::CLEAR_SCREEN;
use crate::app::menu::{self, MenuChoice};
use crate::config::settings::ClockSettings;
use crate::core::clock::ClockState;
use crate::core::runner::{ClockRunner, RunOutcome};
use crate::core::shutdown;
use crate::domain::ports::{DisplaySink, Interrupt};
use crate::utils::error::Result;
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

enum Prompted<T> {
    Value(T),
    Invalid,
    Closed,
}

pub struct Session<R, W, S, I> {
    input: Lines<R>,
    out: W,
    sink: S,
    interrupt: I,
    state: ClockState,
    runner: ClockRunner,
    title: String,
    clear_screen: bool,
    message_pause: Duration,
}

impl<R, W, S, I> Session<R, W, S, I>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    S: DisplaySink,
    I: Interrupt,
{
    pub fn new(
        state: ClockState,
        settings: &ClockSettings,
        input: R,
        out: W,
        sink: S,
        interrupt: I,
    ) -> Self {
        Self {
            input: input.lines(),
            out,
            sink,
            interrupt,
            state,
            runner: settings.runner(),
            title: settings.title.clone(),
            clear_screen: settings.clear_screen,
            message_pause: settings.message_pause,
        }
    }

    pub fn state(&self) -> &ClockState {
        &self.state
    }

    pub fn into_parts(self) -> (ClockState, W, S) {
        (self.state, self.out, self.sink)
    }

    /// Runs the menu until the user quits, input ends, or the interrupt
    /// fires while the menu is waiting.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            self.show_menu()?;

            let Some(line) = self.read_line("    Your choice: ").await? else {
                break;
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::SetTime) => match self.read_time("Set the time:").await? {
                    Prompted::Closed => break,
                    Prompted::Invalid => self.say("Error: please enter valid numbers")?,
                    Prompted::Value((h, m, s)) => match self.state.set_time(h, m, s) {
                        Ok(()) => self.say("Time updated!")?,
                        Err(e) => self.say(&format!("Error: {}", e))?,
                    },
                },
                Some(MenuChoice::SetAlarm) => match self.read_time("Set the alarm:").await? {
                    Prompted::Closed => break,
                    Prompted::Invalid => self.say("Error: please enter valid numbers")?,
                    Prompted::Value((h, m, s)) => match self.state.set_alarm(h, m, s) {
                        Ok(armed) => self.say(&armed.to_string())?,
                        Err(e) => self.say(&format!("Error: {}", e))?,
                    },
                },
                Some(MenuChoice::ToggleMode) => {
                    let mode = self.state.toggle_mode();
                    self.say(&format!("Display mode: {}", mode))?;
                }
                Some(MenuChoice::TogglePause) => {
                    let status = if self.state.toggle_pause() {
                        "paused"
                    } else {
                        "running"
                    };
                    self.say(&format!("Clock is now {}", status))?;
                }
                Some(MenuChoice::StartClock) => {
                    self.say("Starting clock... (Press Ctrl+C to return to menu)")?;
                    self.pause().await;
                    let outcome = self.start_clock().await?;
                    tracing::debug!(ticks = outcome.ticks, "Back at the menu");
                    self.say("Returning to menu...")?;
                }
                Some(MenuChoice::Quit) => break,
                None => self.say("Invalid choice, pick a number from 1 to 6")?,
            }

            self.pause().await;
        }

        self.say("Goodbye! See you soon!")?;
        Ok(())
    }

    /// Runs the clock until the interrupt fires.
    async fn start_clock(&mut self) -> Result<RunOutcome> {
        let (trigger, shutdown) = shutdown::channel();
        let interrupt = &self.interrupt;
        let watcher = async move {
            interrupt.wait().await;
            trigger.trigger();
        };
        let run = self.runner.run(&mut self.state, &mut self.sink, shutdown);
        tokio::pin!(run, watcher);

        let mut interrupted = false;
        loop {
            tokio::select! {
                outcome = &mut run => return outcome,
                _ = &mut watcher, if !interrupted => interrupted = true,
            }
        }
    }

    fn show_menu(&mut self) -> Result<()> {
        if self.clear_screen {
            write!(self.out, "{}", CLEAR_SCREEN)?;
        }
        let text = menu::render_menu(&self.title, &self.state.snapshot());
        write!(self.out, "{}", text)?;
        Ok(())
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "\n    {}", message)?;
        self.out.flush()?;
        Ok(())
    }

    async fn pause(&self) {
        if !self.message_pause.is_zero() {
            tokio::time::sleep(self.message_pause).await;
        }
    }

    /// `None` when input is closed or the interrupt fired.
    async fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;

        let line = tokio::select! {
            line = self.input.next_line() => line?,
            _ = self.interrupt.wait() => {
                writeln!(self.out)?;
                None
            }
        };
        Ok(line)
    }

    async fn read_time(&mut self, heading: &str) -> Result<Prompted<(i64, i64, i64)>> {
        writeln!(self.out, "\n    {}\n", heading)?;

        let mut fields = [0i64; 3];
        let prompts = [
            "    Hours (0-23): ",
            "    Minutes (0-59): ",
            "    Seconds (0-59): ",
        ];
        for (slot, prompt) in fields.iter_mut().zip(prompts) {
            let Some(line) = self.read_line(prompt).await? else {
                return Ok(Prompted::Closed);
            };
            match menu::parse_time_field(&line) {
                Some(value) => *slot = value,
                None => return Ok(Prompted::Invalid),
            }
        }

        let [h, m, s] = fields;
        Ok(Prompted::Value((h, m, s)))
    }
}

use super::settings::ClockSettings;
use super::toml_config::TomlConfig;
use crate::domain::model::{DisplayMode, TimeOfDay};
use crate::utils::error::Result;
use crate::utils::validation;
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "terminal-clock")]
#[command(about = "A terminal clock with an alarm, 12h/24h display and pause")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Start time (HH:MM:SS) instead of the system clock
    #[arg(long)]
    pub time: Option<String>,

    /// Alarm time (HH:MM:SS)
    #[arg(long)]
    pub alarm: Option<String>,

    /// Display mode: 24h or 12h
    #[arg(long)]
    pub mode: Option<String>,

    /// Start with the clock paused
    #[arg(long)]
    pub paused: bool,

    /// Tick length in milliseconds
    #[arg(long)]
    pub tick_ms: Option<u64>,

    /// How long the alarm banner stays up, in seconds
    #[arg(long)]
    pub alarm_hold_secs: Option<u64>,

    /// Window title shown above the time
    #[arg(long)]
    pub title: Option<String>,

    /// Do not clear the screen between ticks
    #[arg(long)]
    pub no_clear: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Command line > config file > defaults.
    pub fn resolve(&self) -> Result<ClockSettings> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                ClockSettings::from_toml(&TomlConfig::from_file(path)?)?
            }
            None => ClockSettings::default(),
        };

        if let Some(time) = &self.time {
            settings.start_time = Some(time.parse::<TimeOfDay>()?);
        }
        if let Some(alarm) = &self.alarm {
            settings.alarm = Some(alarm.parse::<TimeOfDay>()?);
        }
        if let Some(mode) = &self.mode {
            settings.mode = mode.parse::<DisplayMode>()?;
        }
        if self.paused {
            settings.start_paused = true;
        }
        if let Some(ms) = self.tick_ms {
            validation::validate_range("--tick-ms", ms, 1, 60_000)?;
            settings.tick_interval = Duration::from_millis(ms);
        }
        if let Some(secs) = self.alarm_hold_secs {
            validation::validate_range("--alarm-hold-secs", secs, 0, 3_600)?;
            settings.alarm_hold = Duration::from_secs(secs);
        }
        if let Some(title) = &self.title {
            validation::validate_non_empty_string("--title", title)?;
            settings.title = title.clone();
        }
        if self.no_clear {
            settings.clear_screen = false;
        }

        tracing::debug!("Resolved settings: {:?}", settings);
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ClockError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_arguments() {
        let cli = CliConfig::parse_from([
            "terminal-clock",
            "--time",
            "07:00:00",
            "--mode",
            "12h",
            "--tick-ms",
            "100",
            "--no-clear",
        ]);

        let settings = cli.resolve().unwrap();
        assert_eq!(settings.start_time.map(|t| t.as_tuple()), Some((7, 0, 0)));
        assert_eq!(settings.mode, DisplayMode::Hour12);
        assert_eq!(settings.tick_interval, Duration::from_millis(100));
        assert!(!settings.clear_screen);
    }

    #[test]
    fn test_command_line_overrides_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                b"[clock]\ntitle = \"File Title\"\nstart_time = \"10:00:00\"\n\n[alarm]\ntime = \"10:00:05\"\n",
            )
            .unwrap();

        let cli = CliConfig {
            config: Some(temp_file.path().to_str().unwrap().to_string()),
            time: Some("11:00:00".to_string()),
            ..CliConfig::default()
        };

        let settings = cli.resolve().unwrap();
        assert_eq!(settings.title, "File Title");
        assert_eq!(settings.start_time.map(|t| t.as_tuple()), Some((11, 0, 0)));
        assert_eq!(settings.alarm.map(|t| t.as_tuple()), Some((10, 0, 5)));
    }

    #[test]
    fn test_invalid_override() {
        let cli = CliConfig {
            alarm: Some("07:60:00".to_string()),
            ..CliConfig::default()
        };
        assert!(matches!(cli.resolve(), Err(ClockError::InvalidTime(_))));

        let cli = CliConfig {
            tick_ms: Some(0),
            ..CliConfig::default()
        };
        assert!(matches!(
            cli.resolve(),
            Err(ClockError::InvalidConfigValueError { .. })
        ));
    }
}

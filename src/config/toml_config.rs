use crate::domain::model::{DisplayMode, TimeOfDay};
use crate::utils::error::{ClockError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub clock: ClockSection,
    pub alarm: AlarmSection,
    pub display: DisplaySection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockSection {
    pub title: Option<String>,
    pub start_time: Option<String>,
    pub mode: Option<String>,
    pub tick_interval_ms: Option<u64>,
    pub start_paused: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AlarmSection {
    pub time: Option<String>,
    pub hold_seconds: Option<u64>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySection {
    pub clear_screen: Option<bool>,
    pub message_pause_ms: Option<u64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ClockError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ClockError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn start_time(&self) -> Result<Option<TimeOfDay>> {
        self.clock
            .start_time
            .as_deref()
            .map(str::parse)
            .transpose()
    }

    pub fn alarm_time(&self) -> Result<Option<TimeOfDay>> {
        self.alarm.time.as_deref().map(str::parse).transpose()
    }

    pub fn mode(&self) -> Result<Option<DisplayMode>> {
        self.clock.mode.as_deref().map(str::parse).transpose()
    }
}

/// 替換環境變數 (例如 ${CLOCK_TITLE})
///
/// Unknown variables are left as written.
fn substitute_env_vars(content: &str) -> String {
    use regex::Regex;
    use std::sync::OnceLock;

    static ENV_VAR: OnceLock<Regex> = OnceLock::new();
    let re = ENV_VAR.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static pattern"));

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .into_owned()
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.start_time()?;
        self.alarm_time()?;
        self.mode()?;

        if let Some(tick) = self.clock.tick_interval_ms {
            validation::validate_range("clock.tick_interval_ms", tick, 1, 60_000)?;
        }
        if let Some(hold) = self.alarm.hold_seconds {
            validation::validate_range("alarm.hold_seconds", hold, 0, 3_600)?;
        }
        if let Some(title) = &self.clock.title {
            validation::validate_non_empty_string("clock.title", title)?;
        }
        Ok(())
    }
}

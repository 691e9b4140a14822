use crate::domain::model::ClockSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    SetTime,
    SetAlarm,
    ToggleMode,
    TogglePause,
    StartClock,
    Quit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::SetTime),
            "2" => Some(MenuChoice::SetAlarm),
            "3" => Some(MenuChoice::ToggleMode),
            "4" => Some(MenuChoice::TogglePause),
            "5" => Some(MenuChoice::StartClock),
            "6" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

/// Welcome header with the current settings followed by the option list.
pub fn render_menu(title: &str, snapshot: &ClockSnapshot) -> String {
    let alarm = snapshot
        .alarm
        .map(|a| a.to_string())
        .unwrap_or_else(|| "not set".to_string());
    let status = if snapshot.paused { "paused" } else { "running" };

    format!(
        "\n    Welcome to {title}!\n\n\
         \x20   Current time: {time}\n\
         \x20   Alarm: {alarm}\n\
         \x20   Mode: {mode}\n\
         \x20   Status: {status}\n\
         \n    MENU\n\
         [1] Set time         [2] Set alarm       [3] Toggle 12h/24h mode\n\
         [4] Pause/Resume     [5] Start clock     [6] Quit\n\n",
        title = title,
        time = snapshot.time,
        alarm = alarm,
        mode = snapshot.mode,
        status = status,
    )
}

/// Parses one field of a time entry. Range checks happen later in the
/// clock so the error can name the field.
pub fn parse_time_field(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}

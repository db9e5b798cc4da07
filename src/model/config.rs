use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Configuration from config.toml. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub timer: TimerConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub categories: CategoryConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Accessibility toggles and color overrides
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub high_contrast: bool,
    /// Roomier cards: a blank line between each card
    #[serde(default)]
    pub large_text: bool,
    /// No blinking cursor or running-timer spinner
    #[serde(default)]
    pub reduce_motion: bool,
    /// Muted palette that keeps color only where it carries meaning
    #[serde(default)]
    pub focus_theme: bool,
    /// Hex color overrides keyed by theme slot, e.g. `highlight = "#FB4196"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Default: 25
    #[serde(default = "default_work_minutes")]
    pub work_minutes: u32,
    /// Default: 5
    #[serde(default = "default_short_break_minutes")]
    pub short_break_minutes: u32,
    /// Default: 15
    #[serde(default = "default_long_break_minutes")]
    pub long_break_minutes: u32,
    /// Default: 4
    #[serde(default = "default_sessions_before_long_break")]
    pub sessions_before_long_break: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        TimerConfig {
            work_minutes: default_work_minutes(),
            short_break_minutes: default_short_break_minutes(),
            long_break_minutes: default_long_break_minutes(),
            sessions_before_long_break: default_sessions_before_long_break(),
        }
    }
}

fn default_work_minutes() -> u32 {
    25
}

fn default_short_break_minutes() -> u32 {
    5
}

fn default_long_break_minutes() -> u32 {
    15
}

fn default_sessions_before_long_break() -> u32 {
    4
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Ring the terminal bell and set the window title when a reminder fires.
    /// The in-app toast is shown either way.
    #[serde(default = "default_true")]
    pub system: bool,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        NotificationConfig { system: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryConfig {
    /// Categories present at startup
    #[serde(default)]
    pub defaults: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// `error`, `warn`, `info`, `debug` or `trace`. Default: info
    #[serde(default)]
    pub level: Option<String>,
    /// Directory for rotated log files
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

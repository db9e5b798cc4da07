use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::config::AppConfig;

/// Error type for config I/O
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config.toml: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("could not serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
    #[error("{0} already exists (use --force to overwrite)")]
    AlreadyExists(PathBuf),
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

pub const CONFIG_TEMPLATE: &str = r##"# focusboard configuration. Every key is optional.

[ui]
# Roomier cards with a blank line between them
large_text = false
# Stronger colors and borders
high_contrast = false
# No blinking cursor or timer spinner
reduce_motion = false
# Muted colors with fewer distractions
focus_theme = false

# [ui.colors]
# background = "#0C001B"
# text = "#B0AAFF"
# highlight = "#FB4196"
# high = "#FF4444"
# medium = "#FFD700"
# low = "#44FF88"

[timer]
work_minutes = 25
short_break_minutes = 5
long_break_minutes = 15
sessions_before_long_break = 4

[notifications]
# Ring the terminal bell and set the window title when a reminder fires.
# The in-app message appears either way.
system = true

[categories]
defaults = ["Work", "Personal", "Health"]

[log]
# level = "info"
# dir = "/tmp/focusboard-logs"
"##;

/// Where the config lives: `$XDG_CONFIG_HOME/focusboard/config.toml`,
/// falling back to `~/.config/focusboard/config.toml`
pub fn default_config_path() -> PathBuf {
    xdg_dir("XDG_CONFIG_HOME", ".config").join("config.toml")
}

/// Default log directory: `$XDG_STATE_HOME/focusboard`, falling back to
/// `~/.local/state/focusboard`
pub fn default_log_dir() -> PathBuf {
    xdg_dir("XDG_STATE_HOME", ".local/state")
}

fn xdg_dir(var: &str, home_fallback: &str) -> PathBuf {
    let base = std::env::var(var)
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_home().join(home_fallback));
    base.join("focusboard")
}

/// Get the user's home directory
fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

/// Read the config at `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(AppConfig::default()),
        Err(e) => {
            return Err(ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    Ok(toml::from_str(&text)?)
}

/// Write the commented template to `path`, creating parent directories.
/// The file is written to a temp file first and renamed into place.
pub fn write_template(path: &Path, force: bool) -> Result<(), ConfigError> {
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()));
    }
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(CONFIG_TEMPLATE.as_bytes())?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| ConfigError::IoError(e.error))?;
    Ok(())
}

/// Effective config rendered back to TOML (for `fb config`)
pub fn render_config(config: &AppConfig) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(config)?)
}

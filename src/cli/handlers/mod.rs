mod init;
pub use init::cmd_init;

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use serde::Serialize;

use crate::cli::commands::*;
use crate::io::config_io::{self, ConfigError};
use crate::model::config::AppConfig;
use crate::model::task::ReminderTime;
use crate::ops::reminder::next_fire;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config_path = resolve_config_path(cli.config.as_deref());
    match cli.command {
        None => {
            let config = config_io::load_config(&config_path)?;
            crate::tui::run(config)
        }
        Some(Commands::Init(args)) => cmd_init(&config_path, args),
        Some(Commands::Config(args)) => cmd_config(&config_path, args),
        Some(Commands::Remind(args)) => cmd_remind(args),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// `--config` wins, otherwise the XDG location
pub fn resolve_config_path(flag: Option<&Path>) -> PathBuf {
    flag.map(Path::to_path_buf)
        .unwrap_or_else(config_io::default_config_path)
}

/// Parse `YYYY-MM-DDTHH:MM` (seconds optional)
fn parse_local_datetime(s: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| format!("invalid --at value \"{}\": expected YYYY-MM-DDTHH:MM", s))
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct ConfigJson<'a> {
    path: String,
    exists: bool,
    config: &'a AppConfig,
}

fn cmd_config(path: &Path, args: ConfigArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = config_io::load_config(path)?;
    let exists = path.exists();
    if args.json {
        let out = ConfigJson {
            path: path.display().to_string(),
            exists,
            config: &config,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let note = if exists { "" } else { " (not found, using defaults)" };
    println!("# {}{}", path.display(), note);
    print!("{}", config_io::render_config(&config).map_err(ConfigError::from)?);
    Ok(())
}

#[derive(Serialize)]
struct RemindJson {
    reminder: String,
    now: String,
    fire_at: String,
    wait_minutes: i64,
}

fn cmd_remind(args: RemindArgs) -> Result<(), Box<dyn std::error::Error>> {
    let reminder: ReminderTime = args.time.parse()?;
    let now = match args.at.as_deref() {
        Some(s) => parse_local_datetime(s)?,
        None => Local::now().naive_local(),
    };
    let fire_at = next_fire(reminder, now);
    let wait_minutes = (fire_at - now).num_minutes();

    if args.json {
        let out = RemindJson {
            reminder: reminder.to_string(),
            now: now.format("%Y-%m-%dT%H:%M").to_string(),
            fire_at: fire_at.format("%Y-%m-%dT%H:%M").to_string(),
            wait_minutes,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!(
            "{} (in {}h{:02}m)",
            fire_at.format("%Y-%m-%dT%H:%M"),
            wait_minutes / 60,
            wait_minutes % 60
        );
    }
    Ok(())
}

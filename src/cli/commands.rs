use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "fb", about = concat!("[!] focusboard v", env!("CARGO_PKG_VERSION"), " - one thing at a time"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level: error, warn, info, debug or trace
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Directory for log files
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a commented config file
    Init(InitArgs),
    /// Show the config file location and effective settings
    Config(ConfigArgs),
    /// Show when a reminder set for HH:MM would fire
    Remind(RemindArgs),
}

#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct RemindArgs {
    /// Time of day, HH:MM (24-hour)
    pub time: String,
    /// Pretend the current moment is this local time (YYYY-MM-DDTHH:MM)
    #[arg(long)]
    pub at: Option<String>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

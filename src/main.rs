use clap::Parser;
use focusboard::cli::commands::Cli;
use focusboard::cli::handlers;
use focusboard::io::{config_io, logging};

fn main() {
    let cli = Cli::parse();

    // A broken config file is reported by the command itself; logging just
    // falls back to defaults here.
    let config_path = handlers::resolve_config_path(cli.config.as_deref());
    let config = config_io::load_config(&config_path).unwrap_or_default();

    let level = cli
        .log_level
        .clone()
        .or(config.log.level)
        .unwrap_or_else(|| logging::DEFAULT_LEVEL.to_string());
    let log_dir = cli
        .log_dir
        .clone()
        .or(config.log.dir)
        .unwrap_or_else(config_io::default_log_dir);

    let logger = match logging::init_logging(&level, &log_dir) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("warning: logging disabled: {}", e);
            None
        }
    };

    let result = handlers::dispatch(cli);
    if let Err(e) = &result {
        log::error!("event=command_failed error=\"{}\"", e);
    }
    // Flush buffered log lines before a possible exit()
    drop(logger);

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

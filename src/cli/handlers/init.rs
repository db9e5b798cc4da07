use std::path::Path;

use log::info;

use crate::cli::commands::InitArgs;
use crate::io::config_io;

/// Write the config template to `path`
pub fn cmd_init(path: &Path, args: InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    config_io::write_template(path, args.force)?;
    info!("event=config_written path={}", path.display());
    println!("Wrote {}", path.display());
    Ok(())
}

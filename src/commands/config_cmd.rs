use std::path::PathBuf;

use crate::config::{Config, config_file_path};
use crate::error::ConvertError;

pub struct ConfigOptions {
    pub show_path: bool,
    pub config_path: Option<PathBuf>,
}

/// Print the configuration file location, or the effective options as TOML.
pub fn execute_config(options: ConfigOptions) -> Result<(), ConvertError> {
    if options.show_path {
        let path = match options.config_path {
            Some(path) => path,
            None => config_file_path()?,
        };
        println!("Configuration file: {}", path.display());
        return Ok(());
    }

    let config = Config::resolve(options.config_path.as_deref())?;
    print!("{}", config.to_toml()?);
    Ok(())
}

pub mod config_cmd;
pub mod convert_cmd;
pub mod format_cmd;
pub mod parse_cmd;

pub use config_cmd::execute_config;
pub use convert_cmd::execute_convert;
pub use format_cmd::execute_format;
pub use parse_cmd::execute_parse;

use std::path::Path;

use crate::config::Config;
use crate::error::ConvertError;
use crate::model::FormatOptions;

/// Formatting flags given on the command line. Unset fields keep the configured value.
#[derive(Debug, Clone, Default)]
pub struct OptionOverrides {
    pub decimal_places: Option<usize>,
    pub fixed_decimals: Option<bool>,
    pub thousands_separator: Option<String>,
    pub unit_separator: Option<String>,
    pub unit: Option<String>,
}

impl OptionOverrides {
    pub fn apply(self, mut options: FormatOptions) -> FormatOptions {
        if let Some(decimal_places) = self.decimal_places {
            options.decimal_places = decimal_places;
        }
        if let Some(fixed_decimals) = self.fixed_decimals {
            options.fixed_decimals = fixed_decimals;
        }
        if let Some(separator) = self.thousands_separator {
            options.thousands_separator = separator;
        }
        if let Some(separator) = self.unit_separator {
            options.unit_separator = separator;
        }
        if let Some(unit) = self.unit {
            options.unit = Some(unit);
        }
        options
    }
}

/// Configured defaults with command-line overrides applied.
pub fn resolve_options(
    config_path: Option<&Path>,
    overrides: OptionOverrides,
) -> Result<FormatOptions, ConvertError> {
    let config = Config::resolve(config_path)?;
    Ok(overrides.apply(config.format))
}

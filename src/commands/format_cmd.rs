use std::path::PathBuf;

use super::{OptionOverrides, resolve_options};
use crate::error::ConvertError;
use crate::format::format;

pub struct FormatCommandOptions {
    pub value: String,
    pub overrides: OptionOverrides,
    pub config_path: Option<PathBuf>,
}

pub fn execute_format(options: FormatCommandOptions) -> Result<String, ConvertError> {
    let format_options = resolve_options(options.config_path.as_deref(), options.overrides)?;
    let value: f64 =
        options.value.trim().parse().map_err(|_| ConvertError::invalid(options.value.as_str()))?;

    let formatted =
        format(value, &format_options).ok_or_else(|| ConvertError::invalid(options.value))?;
    println!("{formatted}");
    Ok(formatted)
}

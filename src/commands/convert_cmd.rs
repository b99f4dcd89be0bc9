use std::path::PathBuf;

use serde_json::Value;

use super::{OptionOverrides, resolve_options};
use crate::convert::convert;
use crate::error::ConvertError;
use crate::model::{Input, Output};

pub struct ConvertCommandOptions {
    pub value: String,
    pub overrides: OptionOverrides,
    pub config_path: Option<PathBuf>,
}

/// Numbers are formatted and text is parsed. The value is read as JSON first,
/// so `"\"512\""` is text while `512` is a number; anything that is not valid
/// JSON is treated as text.
pub fn execute_convert(options: ConvertCommandOptions) -> Result<Output, ConvertError> {
    let format_options = resolve_options(options.config_path.as_deref(), options.overrides)?;

    let output = match serde_json::from_str::<Value>(&options.value) {
        Ok(value) => convert(Input::try_from(&value)?, &format_options),
        Err(_) => convert(options.value.as_str(), &format_options),
    };

    let output = output.ok_or_else(|| ConvertError::invalid(options.value))?;
    println!("{output}");
    Ok(output)
}

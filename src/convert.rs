use serde_json::Value;
use tracing::debug;

use crate::format::format;
use crate::model::{FormatOptions, Input, Output};
use crate::parse::parse;

/// Format numbers and parse text. `options` only applies to numbers.
pub fn convert<'a>(input: impl Into<Input<'a>>, options: &FormatOptions) -> Option<Output> {
    match input.into() {
        Input::Number(value) => format(value, options).map(Output::Formatted),
        Input::Text(text) => parse(text).map(Output::Bytes),
    }
}

/// Dispatch on a dynamically typed value. Anything other than a JSON number or
/// string yields `None`.
pub fn convert_value(value: &Value, options: &FormatOptions) -> Option<Output> {
    match Input::try_from(value) {
        Ok(input) => convert(input, options),
        Err(err) => {
            debug!(%err, "skipping conversion");
            None
        }
    }
}

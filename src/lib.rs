//! Library entry point for byteconv: convert between byte counts and
//! human-readable sizes such as `"1.5KB"`.

pub mod commands;
pub mod config;
pub mod convert;
pub mod error;
pub mod format;
pub mod model;
pub mod parse;

pub use convert::{convert, convert_value};
pub use error::ConvertError;
pub use format::format;
pub use model::{FormatOptions, Input, Output, Unit};
pub use parse::{parse, parse_input};

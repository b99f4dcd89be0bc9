use std::io;

use thiserror::Error;

/// Error type for the fallible seams of byteconv (configuration, dynamic input, CLI).
///
/// The conversion functions themselves signal failure with `None`.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to render configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Unsupported input type '{0}'")]
    UnsupportedInput(&'static str),

    #[error("Unknown unit '{0}'")]
    UnknownUnit(String),

    #[error("Cannot convert '{0}'")]
    InvalidValue(String),
}

impl ConvertError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ConvertError::Config(msg.into())
    }

    pub fn invalid<S: Into<String>>(value: S) -> Self {
        ConvertError::InvalidValue(value.into())
    }
}

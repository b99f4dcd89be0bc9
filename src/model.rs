use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ConvertError;

/// Byte units, each a power of 1024.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    B,
    KB,
    MB,
    GB,
    TB,
    PB,
}

impl Unit {
    /// All units in ascending order of multiplier.
    pub const ALL: [Unit; 6] = [Unit::B, Unit::KB, Unit::MB, Unit::GB, Unit::TB, Unit::PB];

    pub const fn multiplier(self) -> u64 {
        match self {
            Unit::B => 1,
            Unit::KB => 1 << 10,
            Unit::MB => 1 << 20,
            Unit::GB => 1 << 30,
            Unit::TB => 1 << 40,
            Unit::PB => 1 << 50,
        }
    }

    pub fn from_name(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "b" => Some(Unit::B),
            "kb" => Some(Unit::KB),
            "mb" => Some(Unit::MB),
            "gb" => Some(Unit::GB),
            "tb" => Some(Unit::TB),
            "pb" => Some(Unit::PB),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::B => "B",
            Unit::KB => "KB",
            Unit::MB => "MB",
            Unit::GB => "GB",
            Unit::TB => "TB",
            Unit::PB => "PB",
        }
    }

    /// Largest unit whose multiplier does not exceed `magnitude`, or bytes below 1 KB.
    pub fn for_magnitude(magnitude: f64) -> Self {
        Unit::ALL
            .iter()
            .rev()
            .copied()
            .find(|unit| magnitude >= unit.multiplier() as f64)
            .unwrap_or(Unit::B)
    }
}

impl std::str::FromStr for Unit {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::from_name(s).ok_or_else(|| ConvertError::UnknownUnit(s.to_string()))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Options controlling how [`crate::format`] renders a byte count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatOptions {
    pub decimal_places: usize,
    pub fixed_decimals: bool,
    pub thousands_separator: String,
    pub unit_separator: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            decimal_places: 2,
            fixed_decimals: false,
            thousands_separator: String::new(),
            unit_separator: String::new(),
            unit: None,
        }
    }
}

impl FormatOptions {
    pub fn with_decimal_places(mut self, decimal_places: usize) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    pub fn with_fixed_decimals(mut self, fixed_decimals: bool) -> Self {
        self.fixed_decimals = fixed_decimals;
        self
    }

    pub fn with_thousands_separator<S: Into<String>>(mut self, separator: S) -> Self {
        self.thousands_separator = separator.into();
        self
    }

    pub fn with_unit_separator<S: Into<String>>(mut self, separator: S) -> Self {
        self.unit_separator = separator.into();
        self
    }

    pub fn with_unit<S: Into<String>>(mut self, unit: S) -> Self {
        self.unit = Some(unit.into());
        self
    }
}

/// A value handed to [`crate::convert`]: a byte count to format or text to parse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input<'a> {
    Number(f64),
    Text(&'a str),
}

macro_rules! number_input {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Input<'_> {
                fn from(value: $ty) -> Self {
                    Input::Number(value as f64)
                }
            }
        )*
    };
}

number_input!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl<'a> From<&'a str> for Input<'a> {
    fn from(value: &'a str) -> Self {
        Input::Text(value)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(value: &'a String) -> Self {
        Input::Text(value.as_str())
    }
}

impl<'a> TryFrom<&'a Value> for Input<'a> {
    type Error = ConvertError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(number) => number
                .as_f64()
                .map(Input::Number)
                .ok_or(ConvertError::UnsupportedInput("number")),
            Value::String(text) => Ok(Input::Text(text.as_str())),
            Value::Null => Err(ConvertError::UnsupportedInput("null")),
            Value::Bool(_) => Err(ConvertError::UnsupportedInput("boolean")),
            Value::Array(_) => Err(ConvertError::UnsupportedInput("array")),
            Value::Object(_) => Err(ConvertError::UnsupportedInput("object")),
        }
    }
}

/// Result of [`crate::convert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Formatted(String),
    Bytes(i64),
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Formatted(text) => write!(f, "{text}"),
            Output::Bytes(bytes) => write!(f, "{bytes}"),
        }
    }
}

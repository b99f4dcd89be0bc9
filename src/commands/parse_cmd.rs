use crate::error::ConvertError;
use crate::parse::parse;

pub struct ParseCommandOptions {
    pub text: String,
}

pub fn execute_parse(options: ParseCommandOptions) -> Result<i64, ConvertError> {
    let bytes = parse(&options.text).ok_or_else(|| ConvertError::invalid(options.text))?;
    println!("{bytes}");
    Ok(bytes)
}

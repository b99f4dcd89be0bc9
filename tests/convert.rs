use byteconv::{
    ConvertError, FormatOptions, Input, Output, Unit, convert, convert_value, format, parse,
};
use serde_json::{Value, json};

#[test]
fn numbers_are_formatted() {
    let options = FormatOptions::default();
    assert_eq!(convert(1024, &options), Some(Output::Formatted("1KB".to_string())));
    assert_eq!(convert(1536.0, &options), Some(Output::Formatted("1.5KB".to_string())));
    assert_eq!(convert(f64::NAN, &options), None);
}

#[test]
fn text_is_parsed_and_options_are_ignored() {
    let options = FormatOptions::default().with_fixed_decimals(true).with_unit("MB");
    assert_eq!(convert("1KB", &options), Some(Output::Bytes(1024)));
    assert_eq!(convert("abc", &options), None);
}

#[test]
fn json_values_dispatch_by_type() {
    let options = FormatOptions::default();
    assert_eq!(convert_value(&json!(2048), &options), Some(Output::Formatted("2KB".to_string())));
    assert_eq!(convert_value(&json!("1.5GB"), &options), Some(Output::Bytes(1_610_612_736)));
}

#[test]
fn unsupported_json_types_yield_none() {
    let options = FormatOptions::default();
    assert_eq!(convert_value(&json!(true), &options), None);
    assert_eq!(convert_value(&json!({}), &options), None);
    assert_eq!(convert_value(&Value::Null, &options), None);
    assert_eq!(convert_value(&json!([1024]), &options), None);
}

#[test]
fn input_from_json_names_the_unsupported_type() {
    assert!(matches!(Input::try_from(&Value::Null), Err(ConvertError::UnsupportedInput("null"))));
    assert!(matches!(
        Input::try_from(&json!(false)),
        Err(ConvertError::UnsupportedInput("boolean"))
    ));
    assert_eq!(Input::try_from(&json!("1KB")).unwrap(), Input::Text("1KB"));
    assert_eq!(Input::try_from(&json!(10)).unwrap(), Input::Number(10.0));
}

#[test]
fn output_displays_its_value() {
    assert_eq!(Output::Formatted("1KB".to_string()).to_string(), "1KB");
    assert_eq!(Output::Bytes(-1024).to_string(), "-1024");
}

#[test]
fn formatted_sizes_parse_back_to_the_same_count() {
    let options = FormatOptions::default();
    let counts: [i64; 7] =
        [1024, 1536, 2048, 1_048_576, 3 * (1 << 30), 5 * (1 << 40), 7 * (1 << 50)];
    for count in counts {
        let formatted = format(count as f64, &options).unwrap();
        assert_eq!(parse(&formatted), Some(count), "round trip of {formatted}");
    }
}

#[test]
fn units_resolve_case_insensitively() {
    assert_eq!(Unit::from_name("Kb"), Some(Unit::KB));
    assert_eq!(Unit::from_name("b"), Some(Unit::B));
    assert_eq!(Unit::from_name("kib"), None);
    assert_eq!("pb".parse::<Unit>().unwrap(), Unit::PB);
    assert!(matches!("xb".parse::<Unit>(), Err(ConvertError::UnknownUnit(name)) if name == "xb"));
    assert_eq!(Unit::GB.to_string(), "GB");
}

#[test]
fn unit_multipliers_are_increasing_powers_of_1024() {
    for pair in Unit::ALL.windows(2) {
        assert_eq!(pair[1].multiplier(), pair[0].multiplier() * 1024);
    }
    assert_eq!(Unit::PB.multiplier(), 1 << 50);
}

#[test]
fn oversized_decimal_places_from_json_yield_none() {
    let options: FormatOptions = serde_json::from_value(json!({"decimalPlaces": 100000})).unwrap();
    assert_eq!(convert_value(&json!(1024), &options), None);
}

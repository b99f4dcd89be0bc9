use byteconv::{parse, parse_input};

#[test]
fn parses_values_with_units() {
    assert_eq!(parse("1KB"), Some(1024));
    assert_eq!(parse("1.5GB"), Some(1_610_612_736));
    assert_eq!(parse("1TB"), Some(1_099_511_627_776));
    assert_eq!(parse("1.5PB"), Some(1_688_849_860_263_936));
}

#[test]
fn unit_is_case_insensitive() {
    assert_eq!(parse("1kb"), Some(1024));
    assert_eq!(parse("1Kb"), Some(1024));
    assert_eq!(parse("2mB"), Some(2_097_152));
}

#[test]
fn spaces_are_allowed_before_the_unit() {
    assert_eq!(parse("1 MB"), Some(1_048_576));
    assert_eq!(parse("1   mb"), Some(1_048_576));
}

#[test]
fn explicit_sign_is_accepted() {
    assert_eq!(parse("+2KB"), Some(2048));
    assert_eq!(parse("-1KB"), Some(-1024));
    assert_eq!(parse("-0.5kb"), Some(-512));
}

#[test]
fn fractional_bytes_floor_toward_negative_infinity() {
    assert_eq!(parse("0.0001kb"), Some(0));
    assert_eq!(parse("-0.0001kb"), Some(-1));
}

#[test]
fn plain_numbers_are_bytes() {
    assert_eq!(parse("100"), Some(100));
    assert_eq!(parse("-7"), Some(-7));
    assert_eq!(parse("  42"), Some(42));
}

#[test]
fn text_outside_the_grammar_reads_the_integer_prefix() {
    assert_eq!(parse("3.7"), Some(3));
    assert_eq!(parse("12abc"), Some(12));
    // A bare "b" is not a recognised suffix.
    assert_eq!(parse("1b"), Some(1));
    assert_eq!(parse("1.5b"), Some(1));
    assert_eq!(parse("1KB "), Some(1));
    assert_eq!(parse(" 1KB"), Some(1));
    assert_eq!(parse("1.KB"), Some(1));
}

#[test]
fn text_without_leading_digits_is_rejected() {
    assert_eq!(parse("abc"), None);
    assert_eq!(parse(""), None);
    assert_eq!(parse("-"), None);
    assert_eq!(parse("KB"), None);
    assert_eq!(parse(".5KB"), None);
}

#[test]
fn out_of_range_results_are_rejected() {
    assert_eq!(parse("99999999999999999999"), None);
    assert_eq!(parse("10000000PB"), None);
}

#[test]
fn numbers_pass_through_unchanged() {
    assert_eq!(parse_input(512), Some(512.0));
    assert_eq!(parse_input(512.7), Some(512.7));
    assert_eq!(parse_input(f64::INFINITY), Some(f64::INFINITY));
    assert_eq!(parse_input(f64::NAN), None);
}

#[test]
fn text_input_is_parsed() {
    assert_eq!(parse_input("1KB"), Some(1024.0));
    assert_eq!(parse_input(&String::from("2 kb")), Some(2048.0));
    assert_eq!(parse_input("nope"), None);
}

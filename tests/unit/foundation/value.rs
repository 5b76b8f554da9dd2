use super::*;

#[test]
fn parse_float_reads_numeric_prefix() {
    assert_eq!(parse_float("10px"), Some(10.0));
    assert_eq!(parse_float("  -2.5em"), Some(-2.5));
    assert_eq!(parse_float(".5"), Some(0.5));
    assert_eq!(parse_float("5."), Some(5.0));
    assert_eq!(parse_float("1e3ms"), Some(1000.0));
    assert_eq!(parse_float("3e"), Some(3.0));
    assert_eq!(parse_float("+7"), Some(7.0));
}

#[test]
fn parse_float_rejects_non_numbers() {
    assert_eq!(parse_float(""), None);
    assert_eq!(parse_float("auto"), None);
    assert_eq!(parse_float("."), None);
    assert_eq!(parse_float("-"), None);
    assert_eq!(parse_float("px10"), None);
}

#[test]
fn numeric_reads_numbers_and_text() {
    assert_eq!(StyleValue::from(4.0).numeric(), Some(4.0));
    assert_eq!(StyleValue::from("12px").numeric(), Some(12.0));
    assert_eq!(StyleValue::from("red").numeric(), None);
    assert_eq!(StyleValue::Number(f64::NAN).numeric(), None);
}

#[test]
fn untagged_json_accepts_numbers_and_strings() {
    let map: StyleMap = serde_json::from_str(r#"{"left": 100, "color": "red"}"#).unwrap();
    assert_eq!(map["left"], StyleValue::Number(100.0));
    assert_eq!(map["color"], StyleValue::Text("red".to_owned()));
}

#[test]
fn display_writes_css_text() {
    assert_eq!(StyleValue::from(0.5).to_string(), "0.5");
    assert_eq!(StyleValue::from("10px").to_string(), "10px");
}

//! Tests for the built-in criteria through the public registry.

use valnorm_core::{CriteriaError, Value, default_registry};

fn sanitize(type_name: &str, raw: &str) -> Value {
    default_registry()
        .sanitize(type_name, raw)
        .unwrap_or_else(|e| panic!("{type_name} {raw:?}: {e}"))
}

fn present(type_name: &str, value: Value) -> String {
    default_registry()
        .render(type_name, &value)
        .unwrap()
        .display()
        .to_string()
}

#[test]
fn color_pinned_display() {
    let value = sanitize("color", "ff0000");
    assert_eq!(value, Value::Color(0x00ff80));
    assert_eq!(present("color", value), "#ff0101");
}

#[test]
fn distance_sanitize_and_present() {
    assert_eq!(sanitize("distance", "1.5km"), Value::Number(1500.0));
    assert_eq!(present("distance", Value::Number(1500.0)), "1500m");
    assert_eq!(present("distance", Value::Number(2500.0)), "3km");
    assert_eq!(present("distance", Value::Number(0.5)), "50cm");
    assert_eq!(present("distance", Value::Number(0.005)), "0");
}

#[test]
fn mass_sanitize_and_present() {
    assert_eq!(sanitize("mass", "2500g"), Value::Number(2500.0));
    assert_eq!(present("mass", Value::Number(2500.0)), "3kg");
}

#[test]
fn duration_sanitize_and_fallback() {
    assert_eq!(sanitize("duration", "5s"), Value::Number(5.0));
    assert_eq!(sanitize("duration", "bogus"), Value::Number(1.0));
    assert_eq!(present("duration", Value::Number(5.0)), "5s");
}

#[test]
fn letter_sanitize_and_present() {
    assert_eq!(sanitize("letter", "a"), Value::CharCode(65));
    assert_eq!(present("letter", Value::CharCode(65)), "A");
}

#[test]
fn element_coerces_to_nan() {
    let Value::Number(n) = sanitize("element", "not a number") else {
        panic!("element produces numbers");
    };
    assert!(n.is_nan());
    assert_eq!(present("element", Value::Number(8.0)), "8");
}

#[test]
fn number_is_present_only() {
    assert_eq!(
        default_registry().sanitize("number", "3"),
        Err(CriteriaError::NotSanitizable {
            type_name: "number"
        })
    );
    assert_eq!(present("number", Value::from("3.50")), "3.50");
}

#[test]
fn parse_errors_are_typed() {
    let registry = default_registry();
    assert!(matches!(
        registry.sanitize("color", "red"),
        Err(CriteriaError::ParseMismatch {
            type_name: "color",
            ..
        })
    ));
    assert!(matches!(
        registry.sanitize("distance", "km"),
        Err(CriteriaError::ParseMismatch { .. })
    ));
    assert_eq!(
        registry.sanitize("distance", "12"),
        Err(CriteriaError::UnknownUnit {
            domain: "distance",
            unit: "2".to_string()
        })
    );
    assert_eq!(
        registry.sanitize("mass", "450"),
        Err(CriteriaError::UnknownUnit {
            domain: "mass",
            unit: "0".to_string()
        })
    );
    assert!(matches!(
        registry.sanitize("mass", "12 tons"),
        Err(CriteriaError::UnknownUnit { domain: "mass", .. })
    ));
    assert!(matches!(
        registry.sanitize("duration", "3 x"),
        Err(CriteriaError::UnknownTimeUnit { unit: 'x' })
    ));
    assert!(matches!(
        registry.sanitize("shape", "square"),
        Err(CriteriaError::UnknownType { .. })
    ));
}

#[test]
fn present_does_not_mutate_value() {
    let value = sanitize("distance", "3 miles");
    let before = value.clone();
    let first = present("distance", value.clone());
    let second = present("distance", value.clone());
    assert_eq!(value, before);
    assert_eq!(first, second);
    assert_eq!(first, "5km");
}

#[test]
fn present_rejects_wrong_kind() {
    let err = default_registry()
        .render("letter", &Value::Number(65.0))
        .unwrap_err();
    assert_eq!(
        err,
        CriteriaError::ValueKindMismatch {
            type_name: "letter",
            kind: "number",
        }
    );
}

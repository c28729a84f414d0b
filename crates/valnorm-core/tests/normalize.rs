//! Tests for normalizing and presenting whole records.

use valnorm_core::{
    CriteriaRegistry, ErrorPolicy, NormalizeSettings, Record, Value, normalize_records,
    present_record,
};

fn record(fields: &[(&str, &str)]) -> Record {
    fields
        .iter()
        .map(|(name, value)| (name.to_string(), Value::from(*value)))
        .collect()
}

fn fixture() -> Record {
    record(&[
        ("color", "ff0000"),
        ("date", "2024-01-15"),
        ("distance", "12.5 km"),
        ("duration", "90m"),
        ("element", "26"),
        ("letter", "x"),
        ("mass", "1lb"),
        ("number", "42"),
        ("title", "Iron run"),
    ])
}

#[test]
fn fixture_presentation_snapshot() {
    let registry = CriteriaRegistry::default();
    let mut records = vec![fixture()];
    let report = normalize_records(&mut records, &registry, &NormalizeSettings::default()).unwrap();
    assert_eq!(report.sanitized, 7);
    assert_eq!(report.skipped, 1);
    assert!(!report.has_failures());

    let presentation = present_record(&records[0], &registry);
    let lines: Vec<String> = presentation
        .iter()
        .map(|(field, rendered)| format!("{field}: {}", rendered.display()))
        .collect();

    insta::assert_snapshot!(lines.join("\n"), @r"
    color: #ff0101
    date: 2024-01-15
    distance: 13km
    duration: 5400s
    element: 26
    letter: X
    mass: 454g
    number: 42
    title: Iron run
    ");
}

#[test]
fn isolation_reports_each_bad_field() {
    let registry = CriteriaRegistry::default();
    let mut records = vec![
        record(&[("color", "blue"), ("mass", "1kg")]),
        fixture(),
        record(&[("date", "yesterday-ish"), ("distance", "far")]),
    ];

    let report = normalize_records(&mut records, &registry, &NormalizeSettings::default()).unwrap();

    assert_eq!(report.records, 3);
    let failed: Vec<(usize, &str)> = report
        .failures
        .iter()
        .map(|f| (f.record, f.field.as_str()))
        .collect();
    assert_eq!(failed, vec![(0, "color"), (2, "date"), (2, "distance")]);
    assert_eq!(records[0]["mass"], Value::Number(1000.0));
    assert_eq!(records[0]["color"], Value::from("blue"));
}

#[test]
fn fail_fast_returns_tagged_error() {
    let registry = CriteriaRegistry::default();
    let settings = NormalizeSettings::default().with_error_policy(ErrorPolicy::FailFast);
    let mut records = vec![fixture(), record(&[("letter", "")])];

    let err = normalize_records(&mut records, &registry, &settings).unwrap_err();

    assert_eq!(err.record, 1);
    assert_eq!(err.field, "letter");
    assert_eq!(
        err.to_string(),
        "record 1, field 'letter': letter: '' does not match the expected pattern"
    );
}

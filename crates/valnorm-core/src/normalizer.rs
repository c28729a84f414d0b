//! Field normalizer: rewrites raw record fields into canonical values.
//!
//! A field is sanitized when its name is a registered type that sanitizes
//! and its value is still raw text. Canonical values are never touched, so
//! running a pass twice is a no-op.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info_span, warn};

use crate::error::{CriteriaError, NormalizeError};
use crate::registry::CriteriaRegistry;
use crate::render::Rendered;
use crate::settings::{ErrorPolicy, NormalizeSettings};
use crate::value::{Record, Value};

/// A field that failed to sanitize and kept its raw text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldFailure {
    /// Zero-based index of the record in the pass.
    pub record: usize,
    pub field: String,
    pub raw: String,
    pub error: String,
}

/// Counts and failures from one normalization pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NormalizeReport {
    pub records: usize,
    /// Fields rewritten to a canonical value.
    pub sanitized: usize,
    /// Fields with a registered type that were left as they were (already
    /// canonical, or a type that does not sanitize).
    pub skipped: usize,
    pub failures: Vec<FieldFailure>,
}

impl NormalizeReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Normalize every record in place.
///
/// # Errors
///
/// With [`ErrorPolicy::FailFast`] the first failing field stops the pass and
/// is returned; records and fields before it stay rewritten. With
/// [`ErrorPolicy::Isolate`] this never fails and failures are collected in
/// the report instead.
pub fn normalize_records(
    records: &mut [Record],
    registry: &CriteriaRegistry,
    settings: &NormalizeSettings,
) -> Result<NormalizeReport, NormalizeError> {
    let span = info_span!(
        "normalize",
        records = records.len(),
        policy = %settings.error_policy
    );
    let _guard = span.enter();

    let mut report = NormalizeReport::default();
    for (index, record) in records.iter_mut().enumerate() {
        normalize_into(index, record, registry, settings.error_policy, &mut report)?;
        report.records += 1;
    }

    debug!(
        records = report.records,
        sanitized = report.sanitized,
        skipped = report.skipped,
        failures = report.failures.len(),
        "normalization pass complete"
    );
    Ok(report)
}

/// Normalize a single record in place.
///
/// Failures are reported with record index 0.
pub fn normalize_record(
    record: &mut Record,
    registry: &CriteriaRegistry,
    settings: &NormalizeSettings,
) -> Result<NormalizeReport, NormalizeError> {
    normalize_records(std::slice::from_mut(record), registry, settings)
}

fn normalize_into(
    index: usize,
    record: &mut Record,
    registry: &CriteriaRegistry,
    policy: ErrorPolicy,
    report: &mut NormalizeReport,
) -> Result<(), NormalizeError> {
    for (field, value) in record.iter_mut() {
        let Some(criteria) = registry.get(field) else {
            continue;
        };
        let Value::Text(raw) = value else {
            report.skipped += 1;
            continue;
        };
        if !criteria.sanitizes() {
            report.skipped += 1;
            continue;
        }

        match criteria.sanitize(raw) {
            Ok(canonical) => {
                debug!(record = index, field = %field, kind = canonical.kind(), "sanitized");
                *value = canonical;
                report.sanitized += 1;
            }
            Err(source) => {
                handle_failure(index, field, raw, source, policy, report)?;
            }
        }
    }
    Ok(())
}

fn handle_failure(
    index: usize,
    field: &str,
    raw: &str,
    source: CriteriaError,
    policy: ErrorPolicy,
    report: &mut NormalizeReport,
) -> Result<(), NormalizeError> {
    warn!(record = index, field = %field, error = %source, "field failed to sanitize");
    match policy {
        ErrorPolicy::FailFast => Err(NormalizeError {
            record: index,
            field: field.to_string(),
            source,
        }),
        ErrorPolicy::Isolate => {
            report.failures.push(FieldFailure {
                record: index,
                field: field.to_string(),
                raw: raw.to_string(),
                error: source.to_string(),
            });
            Ok(())
        }
    }
}

/// Rendered form of every field of a record.
pub type Presentation = BTreeMap<String, Rendered>;

/// Present every field of `record`.
///
/// Fields with a registered type are presented by it; the rest, and any
/// field its type cannot present (e.g. raw text left by a failed sanitize),
/// show their plain text.
pub fn present_record(record: &Record, registry: &CriteriaRegistry) -> Presentation {
    record
        .iter()
        .map(|(field, value)| {
            let rendered = registry
                .get(field)
                .and_then(|criteria| {
                    let mut rendered = Rendered::new();
                    match criteria.present(value, &mut rendered) {
                        Ok(()) => Some(rendered),
                        Err(error) => {
                            warn!(field = %field, error = %error, "presenting as plain text");
                            None
                        }
                    }
                })
                .unwrap_or_else(|| Rendered {
                    text: Some(value.to_string()),
                    background_color: None,
                });
            (field.clone(), rendered)
        })
        .collect()
}

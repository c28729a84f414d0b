//! Record loading for the `normalize` command.
//!
//! JSON input is an array of objects. Strings become raw text and numbers
//! become plain numbers; an object already in the tagged canonical form
//! (`{"kind": "number", "value": 1500.0}`) is read back as that value, so
//! the output of one run can be fed to the next. `null` fields are dropped
//! and other JSON values are kept as their JSON text.
//!
//! CSV input needs a header row; every cell is raw text and empty cells are
//! dropped.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value as JsonValue;
use tracing::debug;

use valnorm_core::{Record, Value};

/// Supported input encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Csv,
}

impl InputFormat {
    /// Guess the format from the file extension, defaulting to JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Json,
        }
    }
}

/// Load records from `path`.
pub fn load_records(path: &Path, format: InputFormat) -> Result<Vec<Record>> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let records = match format {
        InputFormat::Json => read_json(file),
        InputFormat::Csv => read_csv(file),
    }
    .with_context(|| format!("read records from {}", path.display()))?;
    debug!(path = %path.display(), records = records.len(), "loaded records");
    Ok(records)
}

/// Read a JSON array of objects.
pub fn read_json<R: Read>(reader: R) -> Result<Vec<Record>> {
    let document: JsonValue = serde_json::from_reader(reader).context("parse JSON")?;
    let JsonValue::Array(items) = document else {
        bail!("expected a JSON array of records");
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            JsonValue::Object(fields) => Ok(fields
                .into_iter()
                .filter_map(|(name, value)| json_field(value).map(|value| (name, value)))
                .collect()),
            other => bail!("record {index} is not an object: {other}"),
        })
        .collect()
}

fn json_field(value: JsonValue) -> Option<Value> {
    match value {
        JsonValue::Null => None,
        JsonValue::String(text) => Some(Value::Text(text)),
        JsonValue::Number(number) => Some(match number.as_f64() {
            Some(n) => Value::Number(n),
            None => Value::Text(number.to_string()),
        }),
        JsonValue::Object(_) => Some(
            serde_json::from_value::<Value>(value.clone())
                .unwrap_or_else(|_| Value::Text(value.to_string())),
        ),
        other => Some(Value::Text(other.to_string())),
    }
}

/// Read CSV with a header row.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);
    let headers = reader.headers().context("read CSV header")?.clone();

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row.with_context(|| format!("read CSV row {}", index + 1))?;
        let record: Record = headers
            .iter()
            .zip(row.iter())
            .filter(|(_, cell)| !cell.is_empty())
            .map(|(name, cell)| (name.to_string(), Value::from(cell)))
            .collect();
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(InputFormat::from_path(Path::new("a.CSV")), InputFormat::Csv);
        assert_eq!(InputFormat::from_path(Path::new("a.json")), InputFormat::Json);
        assert_eq!(InputFormat::from_path(Path::new("records")), InputFormat::Json);
    }

    #[test]
    fn test_json_field_kinds() {
        let records = read_json(
            r#"[{"a": "x", "b": 2, "c": null, "d": true, "e": {"kind": "color", "value": 255}}]"#
                .as_bytes(),
        )
        .unwrap();
        let record = &records[0];
        assert_eq!(record["a"], Value::from("x"));
        assert_eq!(record["b"], Value::Number(2.0));
        assert!(!record.contains_key("c"));
        assert_eq!(record["d"], Value::from("true"));
        assert_eq!(record["e"], Value::Color(255));
    }

    #[test]
    fn test_json_rejects_non_array() {
        let err = read_json(r#"{"a": 1}"#.as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "expected a JSON array of records");
    }
}

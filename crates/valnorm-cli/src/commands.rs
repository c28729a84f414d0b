use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{debug, info, info_span};

use valnorm_cli::input::{InputFormat, load_records};
use valnorm_cli::logging::redact_value;
use valnorm_core::conversion::time::TIME_UNITS;
use valnorm_core::conversion::units::{DISTANCE_UNITS, MASS_UNITS};
use valnorm_core::{
    CriteriaRegistry, ErrorPolicy, NormalizeReport, NormalizeSettings, Presentation, Record,
    normalize_records, present_record,
};

use crate::cli::{InputFormatArg, NormalizeArgs, ValueArgs};
use crate::summary::apply_table_style;

/// Result of a `normalize` run, handed to the summary printer.
pub struct NormalizeOutcome {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub settings: NormalizeSettings,
    pub report: NormalizeReport,
    pub presentations: Option<Vec<Presentation>>,
}

/// Settings from `--config` when given, defaults otherwise.
pub fn load_settings(config: Option<&Path>) -> Result<NormalizeSettings> {
    match config {
        Some(path) => {
            let settings = NormalizeSettings::load(path).context("load settings")?;
            debug!(path = %path.display(), policy = %settings.error_policy, "loaded settings");
            Ok(settings)
        }
        None => Ok(NormalizeSettings::default()),
    }
}

pub fn run_normalize(args: &NormalizeArgs, config: Option<&Path>) -> Result<NormalizeOutcome> {
    let span = info_span!("normalize_file", input = %args.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let mut settings = load_settings(config)?;
    if args.fail_fast {
        settings = settings.with_error_policy(ErrorPolicy::FailFast);
    }
    if let Some(format) = &args.date_format {
        settings = settings.with_date_format(format.clone());
    }

    let format = match args.format {
        Some(InputFormatArg::Json) => InputFormat::Json,
        Some(InputFormatArg::Csv) => InputFormat::Csv,
        None => InputFormat::from_path(&args.input),
    };
    let mut records = load_records(&args.input, format)?;

    let registry = CriteriaRegistry::with_defaults(&settings);
    let report = normalize_records(&mut records, &registry, &settings)
        .with_context(|| format!("normalize {}", args.input.display()))?;

    match &args.output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
            write_records(BufWriter::new(file), &records)
                .with_context(|| format!("write {}", path.display()))?;
        }
        None => write_records(io::stdout().lock(), &records).context("write records")?,
    }

    let presentations = args.present.then(|| {
        records
            .iter()
            .map(|record| present_record(record, &registry))
            .collect()
    });

    info!(
        records = report.records,
        sanitized = report.sanitized,
        failures = report.failures.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "normalize complete"
    );

    Ok(NormalizeOutcome {
        input: args.input.clone(),
        output: args.output.clone(),
        settings,
        report,
        presentations,
    })
}

fn write_records<W: Write>(mut writer: W, records: &[Record]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

pub fn run_parse(args: &ValueArgs, config: Option<&Path>) -> Result<()> {
    let registry = value_registry(args, config)?;
    debug!(type_name = %args.type_name, input = redact_value(&args.text), "parse");
    let value = registry
        .sanitize(&args.type_name, &args.text)
        .with_context(|| format!("parse {}", args.type_name))?;
    println!("{}", serde_json::to_string(&value)?);
    Ok(())
}

pub fn run_present(args: &ValueArgs, config: Option<&Path>) -> Result<()> {
    let registry = value_registry(args, config)?;
    debug!(type_name = %args.type_name, input = redact_value(&args.text), "present");
    let value = registry
        .sanitize(&args.type_name, &args.text)
        .with_context(|| format!("parse {}", args.type_name))?;
    let rendered = registry
        .render(&args.type_name, &value)
        .with_context(|| format!("present {}", args.type_name))?;
    println!("{}", rendered.display());
    Ok(())
}

fn value_registry(args: &ValueArgs, config: Option<&Path>) -> Result<CriteriaRegistry> {
    let mut settings = load_settings(config)?;
    if let Some(format) = &args.date_format {
        settings = settings.with_date_format(format.clone());
    }
    Ok(CriteriaRegistry::with_defaults(&settings))
}

pub fn run_types(config: Option<&Path>) -> Result<()> {
    let settings = load_settings(config)?;
    let registry = CriteriaRegistry::with_defaults(&settings);

    let mut table = Table::new();
    table.set_header(vec!["Type", "Sanitizes", "Description", "Units"]);
    apply_table_style(&mut table);
    for name in registry.type_names() {
        let Some(criteria) = registry.get(name) else {
            continue;
        };
        table.add_row(vec![
            name.to_string(),
            if criteria.sanitizes() { "yes" } else { "no" }.to_string(),
            criteria.description().to_string(),
            unit_tokens(name),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn unit_tokens(type_name: &str) -> String {
    match type_name {
        "distance" => DISTANCE_UNITS.units().collect::<Vec<_>>().join(", "),
        "mass" => MASS_UNITS.units().collect::<Vec<_>>().join(", "),
        "date" | "duration" => TIME_UNITS
            .iter()
            .map(|(unit, _)| unit.to_string())
            .collect::<Vec<_>>()
            .join(", "),
        _ => "-".to_string(),
    }
}

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use valnorm_core::FieldFailure;

use crate::commands::NormalizeOutcome;

/// Print the run summary to stderr, keeping stdout for records.
pub fn print_summary(outcome: &NormalizeOutcome) {
    eprintln!("Input: {}", outcome.input.display());
    if let Some(path) = &outcome.output {
        eprintln!("Output: {}", path.display());
    }
    eprintln!("Error policy: {}", outcome.settings.error_policy);

    let report = &outcome.report;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Records"),
        header_cell("Sanitized"),
        header_cell("Skipped"),
        header_cell("Failed"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(report.records).add_attribute(Attribute::Bold),
        count_cell(report.sanitized, Color::Green),
        count_cell(report.skipped, Color::DarkGrey),
        count_cell(report.failures.len(), Color::Red),
    ]);
    eprintln!("{table}");

    print_failure_table(&report.failures);
    if let Some(presentations) = &outcome.presentations {
        print_presentation_table(presentations);
    }
}

fn print_failure_table(failures: &[FieldFailure]) {
    if failures.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Record"),
        header_cell("Field"),
        header_cell("Raw"),
        header_cell("Error"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for failure in failures {
        table.add_row(vec![
            Cell::new(failure.record),
            field_cell(&failure.field),
            dim_cell(&failure.raw),
            Cell::new(&failure.error).fg(Color::Red),
        ]);
    }
    eprintln!();
    eprintln!("Failures:");
    eprintln!("{table}");
}

fn print_presentation_table(presentations: &[valnorm_core::Presentation]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Record"),
        header_cell("Field"),
        header_cell("Presented"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, presentation) in presentations.iter().enumerate() {
        for (field, rendered) in presentation {
            let shown = match &rendered.background_color {
                Some(color) => Cell::new(format!("background {color}")),
                None => Cell::new(rendered.display()),
            };
            table.add_row(vec![Cell::new(index), field_cell(field), shown]);
        }
    }
    eprintln!();
    eprintln!("Presented:");
    eprintln!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn field_cell(field: &str) -> Cell {
    Cell::new(field).fg(Color::Blue)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}

use anyhow::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use intake_cli::report::{IngestReport, NormalizedValue};
use intake_ingest::ColumnResolution;

pub fn print_normalized(values: &[NormalizedValue]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Input"), header_cell("ISO date")]);
    apply_table_style(&mut table);
    for value in values {
        let result = match (&value.date_iso, &value.error) {
            (Some(date), _) => Cell::new(date).fg(Color::Green),
            (None, Some(error)) => Cell::new(error).fg(Color::Red),
            (None, None) => dim_cell("-"),
        };
        table.add_row(vec![Cell::new(&value.input), result]);
    }
    println!("{table}");
}

pub fn print_ingest_summary(report: &IngestReport) {
    println!("File: {}", report.file.display());
    println!(
        "Columns: {}",
        match report.resolution {
            ColumnResolution::Header => "header row",
            ColumnResolution::Positional => "positional (no header)",
        }
    );
    if !report.columns.is_empty() {
        println!("Source columns: {}", report.columns.join(", "));
    }
    println!("Encoding: {}", report.decoding.encoding);
    if report.decoding.had_replacements {
        println!("  (some bytes could not be decoded and were replaced)");
    }
    println!("Date order: {}", report.date_order);
    println!("Policy: {}", report.policy.label());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows"),
        header_cell("Committed"),
        header_cell("Rejected"),
        header_cell("Status"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    let status = if !report.committed {
        Cell::new("REJECTED")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    } else if report.has_errors() {
        Cell::new("PARTIAL")
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("OK").fg(Color::Green).add_attribute(Attribute::Bold)
    };
    table.add_row(vec![
        Cell::new(report.total_rows),
        count_cell(report.records.len(), Color::Green),
        count_cell(report.rejected.len(), Color::Red),
        status,
    ]);
    println!("{table}");

    if !report.records.is_empty() {
        print_record_table(report);
    }
    if report.has_errors() {
        print_rejected_table(report);
    }
}

fn print_record_table(report: &IngestReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("FirstName"),
        header_cell("LastName"),
        header_cell("DateOfBirth"),
        header_cell("DateISO"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for record in &report.records {
        table.add_row(vec![
            dim_cell(record.row),
            Cell::new(&record.record.first_name),
            Cell::new(&record.record.last_name),
            Cell::new(&record.record.date_of_birth),
            Cell::new(record.date_iso).fg(Color::Green),
        ]);
    }
    println!("{table}");
}

fn print_rejected_table(report: &IngestReport) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Row"), header_cell("Problems")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for error in &report.rejected {
        table.add_row(vec![
            Cell::new(error.row).fg(Color::Red),
            Cell::new(error.messages.join("\n")),
        ]);
    }
    println!("{table}");
}

pub fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn apply_table_style(table: &mut Table) {
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
        .set_content_arrangement(ContentArrangement::Dynamic);
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

//! Table presentation for command results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use resume_model::SectionKey;
use resume_validate::ValidationReport;

use crate::types::{ImportOutcome, ImportSource};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn section_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Section"), header_cell("Visible")]);
    apply_table_style(&mut table);
    table
}

pub fn print_import_summary(outcome: &ImportOutcome) {
    match outcome.source {
        ImportSource::Json => println!("Imported: {}", outcome.input.display()),
        ImportSource::Bundle => {
            println!("Imported bundle: {}", outcome.input.display());
            for file in &outcome.files_processed {
                println!("  processed {file}");
            }
        }
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Section"),
        header_cell("Items"),
        header_cell("Visible"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);

    let document = &outcome.document;
    let mut total = 0usize;
    for key in SectionKey::ALL {
        let count = document.section_len(key);
        if count == 0 {
            continue;
        }
        total += count;
        table.add_row(vec![
            Cell::new(key.as_str()),
            Cell::new(count),
            Cell::new(document.visible_item_count(key)),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total).add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);
    println!("{table}");

    if !outcome.file_errors.is_empty() {
        eprintln!("Errors:");
        for error in &outcome.file_errors {
            eprintln!("- {}: {}", error.file, error.message);
        }
    }
}

pub fn print_validation_report(input: &std::path::Path, report: &ValidationReport) {
    if report.is_valid() {
        println!("{}: no structural issues found", input.display());
        return;
    }
    println!("{}: {} issue(s)", input.display(), report.issues.len());
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Problem")]);
    apply_table_style(&mut table);
    for issue in &report.issues {
        table.add_row(vec![
            Cell::new(&issue.field).fg(Color::Red),
            Cell::new(&issue.message),
        ]);
    }
    println!("{table}");
}

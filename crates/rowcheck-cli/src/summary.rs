use std::io::{self, Write};

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rowcheck_cli::types::{CheckResult, VerifyResult};

pub fn print_check_summary(result: &CheckResult) -> io::Result<()> {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.add_row(vec![label_cell("Input"), Cell::new(result.input.display())]);
    table.add_row(vec![label_cell("Variant"), Cell::new(result.record.variant)]);
    table.add_row(vec![label_cell("Rows scanned"), count_cell(result.rows_scanned, None)]);
    table.add_row(vec![
        label_cell("Invalid rows"),
        count_cell(result.invalid_rows as u64, Some(Color::Red)),
    ]);
    table.add_row(vec![label_cell("Checksum"), Cell::new(&result.record.checksum)]);
    let output = match &result.output {
        Some(path) => Cell::new(path.display()),
        None => Cell::new("(dry run)").fg(Color::DarkGrey),
    };
    table.add_row(vec![label_cell("Result file"), output]);
    print_stdout(&table)
}

pub fn print_verify_summary(result: &VerifyResult) -> io::Result<()> {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.add_row(vec![label_cell("Input"), Cell::new(result.input.display())]);
    table.add_row(vec![
        label_cell("Result file"),
        Cell::new(result.result_path.display()),
    ]);
    table.add_row(vec![label_cell("Variant"), Cell::new(result.stored.variant)]);
    table.add_row(vec![label_cell("Rows scanned"), count_cell(result.rows_scanned, None)]);
    table.add_row(vec![
        label_cell("Invalid rows"),
        count_cell(result.invalid_rows as u64, Some(Color::Red)),
    ]);
    table.add_row(vec![
        label_cell("Checksum"),
        Cell::new(&result.stored.checksum)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    ]);
    print_stdout(&table)
}

/// Print one item to stdout. A closed downstream pipe is not an error.
pub fn print_stdout(item: &impl std::fmt::Display) -> io::Result<()> {
    write_line(&mut io::stdout().lock(), item)
}

fn write_line<W: Write>(out: &mut W, item: &impl std::fmt::Display) -> io::Result<()> {
    match writeln!(out, "{item}").and_then(|()| out.flush()) {
        Err(error) if error.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => result,
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn label_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: u64, nonzero: Option<Color>) -> Cell {
    let cell = Cell::new(count).set_alignment(CellAlignment::Right);
    match nonzero {
        Some(color) if count > 0 => cell.fg(color),
        _ => cell,
    }
}

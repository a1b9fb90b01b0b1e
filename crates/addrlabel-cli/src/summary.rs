use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use addrlabel_clean::MissingField;
use addrlabel_cli::types::{CheckResult, RunResult};
use addrlabel_model::Diagnostics;

pub fn print_run_summary(result: &RunResult) {
    println!("Input: {}", result.input.display());
    if result.dry_run {
        println!("Output: (dry run, nothing written)");
    } else {
        println!("Output: {}", result.output_dir.display());
    }

    let mut table = count_table();
    table.add_row(vec![Cell::new("Records"), Cell::new(result.total)]);
    table.add_row(vec![
        Cell::new("Eligible"),
        Cell::new(result.eligible)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Excluded"),
        count_cell(result.excluded(), Color::Yellow),
    ]);
    add_diagnostic_rows(&mut table, &result.diagnostics);
    table.add_row(vec![Cell::new("Labels placed"), Cell::new(result.placed)]);
    table.add_row(vec![Cell::new("Pages"), Cell::new(result.pages)]);
    println!("{table}");

    if result.dry_run {
        println!("{}", result.report_text);
    } else {
        print_output_table(result);
    }
}

pub fn print_check_summary(result: &CheckResult) {
    println!("Input: {}", result.input.display());
    let mut table = count_table();
    table.add_row(vec![Cell::new("Records"), Cell::new(result.total)]);
    table.add_row(vec![Cell::new("Eligible"), Cell::new(result.eligible)]);
    table.add_row(vec![
        Cell::new("Excluded"),
        count_cell(result.total - result.eligible, Color::Yellow),
    ]);
    add_diagnostic_rows(&mut table, &result.diagnostics);
    println!("{table}");
    print_missing_field_table(&result.missing_fields);
}

fn count_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table
}

fn add_diagnostic_rows(table: &mut Table, diagnostics: &Diagnostics) {
    for diagnostic in diagnostics {
        table.add_row(vec![
            Cell::new(format!("  {}", diagnostic.kind.label())).fg(Color::DarkGrey),
            count_cell(diagnostic.count, Color::Yellow),
        ]);
    }
}

fn print_output_table(result: &RunResult) {
    let outputs = &result.outputs;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Output"), header_cell("Path")]);
    apply_table_style(&mut table);

    let pages = match (outputs.label_pages.first(), outputs.label_pages.len()) {
        (Some(first), 1) => path_cell(Some(first.as_path())),
        (Some(first), count) => Cell::new(format!(
            "{} (+{} more)",
            first.display(),
            count - 1
        )),
        (None, _) => dim_cell("-"),
    };
    table.add_row(vec![Cell::new("Label pages"), pages]);
    table.add_row(vec![
        Cell::new("Layout JSON"),
        path_cell(outputs.layout_json.as_deref()),
    ]);
    match &outputs.mail_merge {
        Some(mail_merge) => table.add_row(vec![
            Cell::new(format!("Mail-merge CSV ({})", mail_merge.encoding)),
            path_cell(Some(mail_merge.path.as_path())),
        ]),
        None => table.add_row(vec![Cell::new("Mail-merge CSV"), dim_cell("-")]),
    };
    table.add_row(vec![
        Cell::new("Quality report"),
        path_cell(outputs.report.as_deref()),
    ]);
    println!("{table}");
}

fn print_missing_field_table(missing_fields: &[MissingField]) {
    if missing_fields.is_empty() {
        println!("No missing values.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Missing"),
        header_cell("Share"),
        header_cell("Rows"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for entry in missing_fields {
        table.add_row(vec![
            Cell::new(entry.field.label()),
            count_cell(entry.count, Color::Yellow),
            Cell::new(format!("{:.1}%", entry.percentage)),
            dim_cell(entry.rows_preview()),
        ]);
    }
    println!("{table}");
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
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn path_cell(path: Option<&Path>) -> Cell {
    match path {
        Some(path) => Cell::new(path.display()).fg(Color::Green),
        None => dim_cell("-"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

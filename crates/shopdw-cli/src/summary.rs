//! Console summary rendering.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use shopdw_cli::types::RunOutcome;
use shopdw_report::Analytics;

pub fn print_summary(outcome: &RunOutcome) {
    let summary = &outcome.summary;
    println!("Snapshot: {}", summary.snapshot_dir.display());
    println!("Output: {}", summary.output_dir.display());
    if let Some(path) = &summary.schema_sql {
        println!("Schema: {}", path.display());
    }
    if let Some(path) = &summary.load_sql {
        println!("Load script: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Records"),
        header_cell("CSV"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    let mut total_records = 0usize;
    for entry in &summary.tables {
        total_records += entry.records;
        table.add_row(vec![
            Cell::new(entry.table.table_name())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(entry.records),
            output_cell(entry.outputs.csv.is_some()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_records).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");

    print_quality_counters(outcome);
    if let Some(analytics) = &outcome.analytics {
        print_analytics(analytics);
    }
}

fn print_quality_counters(outcome: &RunOutcome) {
    let facts = &outcome.summary.facts;
    let ingest = &outcome.summary.ingest;
    let mut notes = Vec::new();
    if ingest.malformed > 0 {
        notes.push(format!("{} malformed source documents skipped", ingest.malformed));
    }
    if facts.orders_skipped_no_customer > 0 {
        notes.push(format!(
            "{} orders skipped (unknown customer)",
            facts.orders_skipped_no_customer
        ));
    }
    if facts.orders_skipped_no_date > 0 {
        notes.push(format!(
            "{} orders skipped (no creation date)",
            facts.orders_skipped_no_date
        ));
    }
    if facts.items_skipped_no_product > 0 {
        notes.push(format!(
            "{} items skipped (unknown product)",
            facts.items_skipped_no_product
        ));
    }
    if facts.location_fallbacks > 0 {
        notes.push(format!(
            "{} fact rows fell back to the default location",
            facts.location_fallbacks
        ));
    }
    if notes.is_empty() {
        return;
    }
    println!();
    println!("Data quality:");
    for note in notes {
        println!("- {note}");
    }
}

fn print_analytics(analytics: &Analytics) {
    println!();
    println!("Total revenue (paid orders): {:.2}", analytics.total_revenue_paid);

    if !analytics.top_categories.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Category"), header_cell("Revenue")]);
        apply_table_style(&mut table);
        align_column(&mut table, 1, CellAlignment::Right);
        for entry in &analytics.top_categories {
            table.add_row(vec![
                Cell::new(&entry.category),
                Cell::new(format!("{:.2}", entry.revenue)),
            ]);
        }
        println!("Top categories by revenue:");
        println!("{table}");
    }

    if !analytics.top_products.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Product"), header_cell("Units")]);
        apply_table_style(&mut table);
        align_column(&mut table, 1, CellAlignment::Right);
        for entry in &analytics.top_products {
            table.add_row(vec![Cell::new(&entry.product), Cell::new(entry.units)]);
        }
        println!("Top products by units sold:");
        println!("{table}");
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
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

fn output_cell(written: bool) -> Cell {
    if written {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

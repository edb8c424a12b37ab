//! SQL load-script generation.
//!
//! The sink is a relational warehouse loaded by full refresh: `schema.sql`
//! drops and recreates the five tables, `load.sql` inserts the finished
//! rows. Generation is sequenced strictly after the transform; nothing
//! here touches a live database.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::AnyValue;
use tracing::info;

use shopdw_core::WarehouseFrame;
use shopdw_model::{ColumnType, TableKind};

/// Rows per generated INSERT statement.
const INSERT_BATCH_ROWS: usize = 500;

/// Paths of the generated SQL files.
#[derive(Debug, Clone)]
pub struct SqlOutputs {
    pub schema: PathBuf,
    pub load: PathBuf,
}

fn sql_type(column_type: ColumnType) -> &'static str {
    match column_type {
        ColumnType::Integer => "INTEGER",
        ColumnType::Decimal => "DECIMAL(10,2)",
        ColumnType::Text => "TEXT",
        ColumnType::Date => "DATE",
        ColumnType::Boolean => "BOOLEAN",
    }
}

/// Render the star-schema DDL: drops in dependency order, then creates.
pub fn render_schema_sql() -> String {
    let mut out = String::new();
    out.push_str("-- Sales warehouse star schema. Loaded by full refresh:\n");
    out.push_str("-- every run drops and recreates all five tables.\n\n");
    for table in TableKind::drop_order() {
        out.push_str(&format!("DROP TABLE IF EXISTS {};\n", table.table_name()));
    }
    out.push('\n');
    for table in TableKind::load_order() {
        out.push_str(&render_create_table(table));
        out.push('\n');
    }
    out
}

fn render_create_table(table: TableKind) -> String {
    let mut lines = Vec::new();
    for column in table.columns() {
        let mut line = format!("    {} {}", column.name, sql_type(column.column_type));
        if column.name == table.primary_key() {
            line.push_str(" PRIMARY KEY");
        } else if column.not_null {
            line.push_str(" NOT NULL");
        }
        lines.push(line);
    }
    for (column, referenced) in table.foreign_keys() {
        lines.push(format!(
            "    FOREIGN KEY ({column}) REFERENCES {}({})",
            referenced.table_name(),
            referenced.primary_key()
        ));
    }
    format!(
        "CREATE TABLE {} (\n{}\n);\n",
        table.table_name(),
        lines.join(",\n")
    )
}

/// Render INSERT statements for one frame, batched for loader comfort.
pub fn render_insert_sql(frame: &WarehouseFrame) -> Result<String> {
    let columns = frame.table.columns();
    let column_list = columns
        .iter()
        .map(|column| column.name)
        .collect::<Vec<_>>()
        .join(", ");

    let mut series = Vec::with_capacity(columns.len());
    for column in columns {
        let found = frame
            .data
            .column(column.name)
            .with_context(|| format!("{}: missing column {}", frame.table, column.name))?;
        series.push(found);
    }

    let mut out = String::new();
    let height = frame.data.height();
    let mut row = 0usize;
    while row < height {
        let batch_end = (row + INSERT_BATCH_ROWS).min(height);
        out.push_str(&format!(
            "INSERT INTO {} ({column_list}) VALUES\n",
            frame.table.table_name()
        ));
        for idx in row..batch_end {
            let values = series
                .iter()
                .map(|column| sql_literal(column.get(idx).unwrap_or(AnyValue::Null)))
                .collect::<Vec<_>>()
                .join(", ");
            let terminator = if idx + 1 == batch_end { ";\n" } else { ",\n" };
            out.push_str(&format!("    ({values}){terminator}"));
        }
        row = batch_end;
    }
    Ok(out)
}

fn sql_literal(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => "NULL".to_string(),
        AnyValue::Boolean(b) => if b { "1" } else { "0" }.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format!("{v}"),
        AnyValue::Float64(v) => format!("{v}"),
        AnyValue::String(s) => quote(s),
        AnyValue::StringOwned(s) => quote(s.as_str()),
        other => quote(&shopdw_core::any_to_string(other)),
    }
}

fn quote(raw: &str) -> String {
    format!("'{}'", raw.replace('\'', "''"))
}

/// Write `schema.sql` and `load.sql` into the output directory.
pub fn write_sql_outputs(frames: &[WarehouseFrame], output_dir: &Path) -> Result<SqlOutputs> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create {}", output_dir.display()))?;

    let schema_path = output_dir.join("schema.sql");
    std::fs::write(&schema_path, render_schema_sql())
        .with_context(|| format!("write {}", schema_path.display()))?;
    info!(path = %schema_path.display(), "schema written");

    let mut load = String::new();
    for frame in frames {
        load.push_str(&format!("-- {} ({} rows)\n", frame.table_name(), frame.record_count()));
        load.push_str(&render_insert_sql(frame)?);
        load.push('\n');
    }
    let load_path = output_dir.join("load.sql");
    std::fs::write(&load_path, load).with_context(|| format!("write {}", load_path.display()))?;
    info!(path = %load_path.display(), "load script written");

    Ok(SqlOutputs {
        schema: schema_path,
        load: load_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_drops_fact_table_before_dimensions() {
        let sql = render_schema_sql();
        let fact_drop = sql.find("DROP TABLE IF EXISTS fact_sales").expect("fact drop");
        let dim_drop = sql.find("DROP TABLE IF EXISTS dim_customer").expect("dim drop");
        assert!(fact_drop < dim_drop);
        assert!(sql.contains("CREATE TABLE fact_sales"));
        assert!(sql.contains("FOREIGN KEY (customer_id) REFERENCES dim_customer(customer_id)"));
    }

    #[test]
    fn literals_are_escaped_and_typed() {
        assert_eq!(sql_literal(AnyValue::Null), "NULL");
        assert_eq!(sql_literal(AnyValue::Boolean(true)), "1");
        assert_eq!(sql_literal(AnyValue::Int64(42)), "42");
        assert_eq!(sql_literal(AnyValue::String("O'Brien")), "'O''Brien'");
    }
}

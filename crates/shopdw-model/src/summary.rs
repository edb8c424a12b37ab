//! Run result and diagnostic counter types shared across the pipeline.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::schema::TableKind;

/// Per-collection ingest counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestStats {
    pub users: usize,
    pub products: usize,
    pub orders: usize,
    /// Records that failed to deserialize and were skipped.
    pub malformed: usize,
}

impl IngestStats {
    pub fn total(&self) -> usize {
        self.users + self.products + self.orders
    }
}

/// Diagnostic counters from fact construction.
///
/// Unresolvable foreign keys drop rows by design; these counters make the
/// data-quality cost visible without turning it into an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactStats {
    pub orders_seen: usize,
    /// Orders dropped whole because the owning customer was unknown.
    pub orders_skipped_no_customer: usize,
    /// Orders dropped whole because the creation timestamp was missing or
    /// unparseable, so no time dimension row exists for them.
    pub orders_skipped_no_date: usize,
    /// Items dropped individually because the product was unknown.
    pub items_skipped_no_product: usize,
    /// Fact rows that fell back to the first location row.
    pub location_fallbacks: usize,
    /// Fact rows emitted.
    pub rows_emitted: usize,
}

impl FactStats {
    pub fn orders_skipped(&self) -> usize {
        self.orders_skipped_no_customer + self.orders_skipped_no_date
    }
}

/// Output files written for one table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputPaths {
    pub csv: Option<PathBuf>,
}

/// Per-table outcome reported by the CLI summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSummary {
    pub table: TableKind,
    pub records: usize,
    pub outputs: OutputPaths,
}

/// Final result of an ETL run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub snapshot_dir: PathBuf,
    pub output_dir: PathBuf,
    pub tables: Vec<TableSummary>,
    pub ingest: IngestStats,
    pub facts: FactStats,
    /// Generated SQL files (schema + load), when the sql format is enabled.
    pub schema_sql: Option<PathBuf>,
    pub load_sql: Option<PathBuf>,
}

impl RunSummary {
    pub fn record_count(&self, table: TableKind) -> usize {
        self.tables
            .iter()
            .find(|summary| summary.table == table)
            .map(|summary| summary.records)
            .unwrap_or(0)
    }
}

//! Warehouse frame: one finished table ready for the output writers.

use polars::prelude::DataFrame;

use shopdw_model::TableKind;

/// A finished warehouse table: its identity plus the materialized data.
///
/// Frames are produced once at the end of the transform and are read-only
/// from then on; writers never mutate them.
#[derive(Debug, Clone)]
pub struct WarehouseFrame {
    pub table: TableKind,
    pub data: DataFrame,
}

impl WarehouseFrame {
    pub fn new(table: TableKind, data: DataFrame) -> Self {
        Self { table, data }
    }

    pub fn record_count(&self) -> usize {
        self.data.height()
    }

    /// Table name, also used as the export file stem.
    pub fn table_name(&self) -> &'static str {
        self.table.table_name()
    }
}

//! Flat-file export of the finished warehouse tables.
//!
//! A pure read of the final table set: one `<table>.csv` per frame, no
//! transformation logic.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::{CsvWriter, SerWriter};
use tracing::info;

use shopdw_core::WarehouseFrame;
use shopdw_model::TableKind;

/// Write every frame to `<output_dir>/<table>.csv`.
pub fn write_csv_outputs(
    frames: &[WarehouseFrame],
    output_dir: &Path,
) -> Result<Vec<(TableKind, PathBuf)>> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create {}", output_dir.display()))?;
    let mut written = Vec::with_capacity(frames.len());
    for frame in frames {
        let path = output_dir.join(format!("{}.csv", frame.table_name()));
        let mut file =
            File::create(&path).with_context(|| format!("create {}", path.display()))?;
        let mut data = frame.data.clone();
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut data)
            .with_context(|| format!("write {}", path.display()))?;
        info!(
            table = %frame.table,
            rows = frame.record_count(),
            path = %path.display(),
            "csv export written"
        );
        written.push((frame.table, path));
    }
    Ok(written)
}

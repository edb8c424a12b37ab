//! ETL run orchestration with explicit stages.
//!
//! The stages run strictly in order:
//! 1. **Ingest**: locate and read the snapshot exports
//! 2. **Transform**: build dimensions, lookup index, and facts
//! 3. **Output**: write CSV exports and/or SQL load scripts
//! 4. **Analytics**: headline numbers from the finished frames
//!
//! A failing connector (missing snapshot, unwritable output dir) aborts the
//! run before any table is produced or written; there is no partial-commit
//! path, since full-refresh loading makes a clean re-run safe.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use shopdw_core::{TransformOutput, WarehouseFrame, run_transform};
use shopdw_ingest::{Snapshot, load_snapshot};
use shopdw_model::{IngestStats, OutputPaths, RunSummary, TableSummary};
use shopdw_report::{Analytics, compute_analytics, write_csv_outputs, write_sql_outputs};

use crate::types::RunOutcome;

/// Everything a run needs to know; the clap layer maps its args onto this.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub snapshot_dir: PathBuf,
    pub output_dir: Option<PathBuf>,
    pub write_csv: bool,
    pub write_sql: bool,
    pub dry_run: bool,
    pub analytics: bool,
}

/// Default output directory: `<snapshot>/warehouse`.
pub fn resolve_output_dir(snapshot_dir: &Path, output_dir: Option<PathBuf>) -> PathBuf {
    output_dir.unwrap_or_else(|| snapshot_dir.join("warehouse"))
}

/// Stage 1: load the snapshot.
pub fn ingest(snapshot_dir: &Path) -> Result<(Snapshot, IngestStats)> {
    info_span!("ingest").in_scope(|| {
        let start = Instant::now();
        let loaded = load_snapshot(snapshot_dir)
            .with_context(|| format!("load snapshot from {}", snapshot_dir.display()))?;
        debug!(duration_ms = start.elapsed().as_millis(), "ingest complete");
        Ok(loaded)
    })
}

/// Execute a full ETL run.
pub fn execute_run(options: &RunOptions) -> Result<RunOutcome> {
    let span = info_span!("etl_run", snapshot = %options.snapshot_dir.display());
    let _guard = span.enter();

    let (snapshot, ingest_stats) = ingest(&options.snapshot_dir)?;
    let output = run_transform(&snapshot)?;
    let output_dir = resolve_output_dir(&options.snapshot_dir, options.output_dir.clone());

    let mut tables = table_summaries(&output.frames);
    let mut schema_sql = None;
    let mut load_sql = None;
    if !options.dry_run {
        if options.write_csv {
            let written = info_span!("csv_export")
                .in_scope(|| write_csv_outputs(&output.frames, &output_dir))?;
            for (table, path) in written {
                if let Some(summary) = tables.iter_mut().find(|summary| summary.table == table) {
                    summary.outputs.csv = Some(path);
                }
            }
        }
        if options.write_sql {
            let outputs = info_span!("sql_export")
                .in_scope(|| write_sql_outputs(&output.frames, &output_dir))?;
            schema_sql = Some(outputs.schema);
            load_sql = Some(outputs.load);
        }
    }

    let analytics = analytics_for(&output, options.analytics)?;
    Ok(RunOutcome {
        summary: RunSummary {
            snapshot_dir: options.snapshot_dir.clone(),
            output_dir,
            tables,
            ingest: ingest_stats,
            facts: output.stats,
            schema_sql,
            load_sql,
        },
        analytics,
    })
}

fn analytics_for(output: &TransformOutput, enabled: bool) -> Result<Option<Analytics>> {
    if !enabled {
        return Ok(None);
    }
    info_span!("analytics").in_scope(|| compute_analytics(&output.frames).map(Some))
}

/// One summary entry per frame, in load order, without output paths yet.
pub fn table_summaries(frames: &[WarehouseFrame]) -> Vec<TableSummary> {
    frames
        .iter()
        .map(|frame| TableSummary {
            table: frame.table,
            records: frame.record_count(),
            outputs: OutputPaths::default(),
        })
        .collect()
}

/// Render the star-schema DDL (the `schema` subcommand).
pub fn schema_ddl() -> String {
    shopdw_report::render_schema_sql()
}

//! Subcommand entry points.

use anyhow::Result;

use shopdw_cli::pipeline::{RunOptions, execute_run, schema_ddl};
use shopdw_cli::types::RunOutcome;

use crate::cli::RunArgs;

pub fn run_etl(args: &RunArgs) -> Result<RunOutcome> {
    let options = RunOptions {
        snapshot_dir: args.snapshot_dir.clone(),
        output_dir: args.output_dir.clone(),
        write_csv: args.format.writes_csv(),
        write_sql: args.format.writes_sql(),
        dry_run: args.dry_run,
        analytics: !args.no_analytics,
    };
    execute_run(&options)
}

pub fn run_schema() {
    print!("{}", schema_ddl());
}

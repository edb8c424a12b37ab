//! Warehouse output generation.
//!
//! This crate is a pure consumer of the transform engine's finished
//! frames. It provides:
//!
//! - **CSV exports**: one flat file per table for BI tools
//! - **SQL load scripts**: full-refresh DDL plus batched INSERTs
//! - **Analytics summary**: headline numbers computed from the frames

mod analytics;
mod csv;
mod sql;

pub use analytics::{Analytics, CategoryRevenue, ProductUnits, compute_analytics};
pub use csv::write_csv_outputs;
pub use sql::{SqlOutputs, render_insert_sql, render_schema_sql, write_sql_outputs};

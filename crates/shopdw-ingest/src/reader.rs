//! Tolerant record readers.
//!
//! Export files come in two shapes: a single JSON array, or one JSON
//! document per line (mongoexport's default). The reader detects the shape
//! from the first non-whitespace byte. A record that fails to deserialize
//! is logged and counted, never fatal; the surrounding document set still
//! loads.

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::{IngestError, Result};

/// Records read from one export file plus the count of documents skipped
/// because they failed to deserialize.
#[derive(Debug)]
pub struct ReadOutcome<T> {
    pub records: Vec<T>,
    pub malformed: usize,
}

pub fn read_records<T: DeserializeOwned>(path: &Path, collection: &str) -> Result<ReadOutcome<T>> {
    let raw = std::fs::read_to_string(path)?;
    let trimmed = raw.trim_start();
    if trimmed.starts_with('[') {
        read_array(trimmed, path, collection)
    } else {
        Ok(read_lines(&raw, collection))
    }
}

fn read_array<T: DeserializeOwned>(
    raw: &str,
    path: &Path,
    collection: &str,
) -> Result<ReadOutcome<T>> {
    // The outer array must parse; individual documents are tolerated.
    let documents: Vec<serde_json::Value> =
        serde_json::from_str(raw).map_err(|source| IngestError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    let mut records = Vec::with_capacity(documents.len());
    let mut malformed = 0usize;
    for (index, document) in documents.into_iter().enumerate() {
        match serde_json::from_value::<T>(document) {
            Ok(record) => records.push(record),
            Err(error) => {
                malformed += 1;
                warn!(collection, index, %error, "skipping malformed document");
            }
        }
    }
    Ok(ReadOutcome { records, malformed })
}

fn read_lines<T: DeserializeOwned>(raw: &str, collection: &str) -> ReadOutcome<T> {
    let mut records = Vec::new();
    let mut malformed = 0usize;
    for (index, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<T>(line) {
            Ok(record) => records.push(record),
            Err(error) => {
                malformed += 1;
                warn!(collection, line = index + 1, %error, "skipping malformed document");
            }
        }
    }
    ReadOutcome { records, malformed }
}

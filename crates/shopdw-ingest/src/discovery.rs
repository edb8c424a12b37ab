//! Snapshot folder discovery.
//!
//! A snapshot directory holds one export file per collection, named after
//! the collection (`users`, `products`, `orders`) with a `.json`, `.jsonl`,
//! or `.ndjson` extension. Matching is case-insensitive on the file stem.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Accepted export extensions, in preference order when several exist.
pub const SNAPSHOT_EXTENSIONS: &[&str] = &["json", "jsonl", "ndjson"];

/// The three collection exports a snapshot must contain.
#[derive(Debug, Clone)]
pub struct SnapshotFiles {
    pub users: PathBuf,
    pub products: PathBuf,
    pub orders: PathBuf,
}

/// Find the export file for one collection, or `None` if absent.
pub fn find_collection_file(dir: &Path, collection: &str) -> Result<Option<PathBuf>> {
    let mut candidates: Vec<PathBuf> = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let stem_matches = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .is_some_and(|stem| stem.eq_ignore_ascii_case(collection));
        let ext_known = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                SNAPSHOT_EXTENSIONS
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known))
            });
        if stem_matches && ext_known {
            candidates.push(path);
        }
    }
    candidates.sort_by_key(|path| {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        SNAPSHOT_EXTENSIONS
            .iter()
            .position(|known| *known == ext)
            .unwrap_or(usize::MAX)
    });
    Ok(candidates.into_iter().next())
}

/// Locate all three collection exports. A missing collection is fatal to
/// the run: without a consistent snapshot there is nothing to transform.
pub fn locate_snapshot(dir: &Path) -> Result<SnapshotFiles> {
    let resolve = |collection: &str| -> Result<PathBuf> {
        find_collection_file(dir, collection)?.ok_or_else(|| IngestError::MissingCollection {
            dir: dir.to_path_buf(),
            collection: collection.to_string(),
        })
    };
    Ok(SnapshotFiles {
        users: resolve("users")?,
        products: resolve("products")?,
        orders: resolve("orders")?,
    })
}

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("snapshot folder {} has no {collection} export (.json/.jsonl/.ndjson)", dir.display())]
    MissingCollection { dir: PathBuf, collection: String },
}

pub type Result<T> = std::result::Result<T, IngestError>;

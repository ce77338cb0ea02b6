//! CSV loading and snapshot construction.
//!
//! The loader is the only place the crate touches the filesystem. It reads
//! the cleaned air-crashes CSV, runs the rows through the normalizer, and
//! produces a [`Snapshot`] tagged with a SHA-256 checksum of the source
//! bytes. A source that cannot be read or parsed at all is a fatal
//! construction error; no partial snapshot is ever produced. Individual bad
//! rows, by contrast, are dropped inside the normalizer and never surface
//! here.

use std::path::Path;

use sha2::{Digest, Sha256};

use crate::models::{normalize_rows, RawCrashRow, Snapshot};

/// Errors constructing a snapshot from the raw source.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read source file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse source CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Calculate the SHA-256 checksum of the source content, hex-encoded.
pub fn calculate_checksum(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}

/// Build a snapshot from CSV content already in memory.
pub fn snapshot_from_csv_str(content: &str) -> Result<Snapshot, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows: Vec<RawCrashRow> = Vec::new();
    for result in reader.deserialize() {
        let row: RawCrashRow = result?;
        rows.push(row);
    }

    let total = rows.len();
    let records = normalize_rows(rows);
    tracing::info!(
        source_rows = total,
        records = records.len(),
        "built snapshot from CSV source"
    );

    Ok(Snapshot::new(records, calculate_checksum(content.as_bytes())))
}

/// Build a snapshot from the CSV file at `path`.
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<Snapshot, LoadError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    snapshot_from_csv_str(&content)
}

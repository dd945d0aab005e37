//! Ingestion pipeline errors

use std::path::PathBuf;

use thiserror::Error;

use infra_db::DatabaseError;

/// Errors that can abort an ingestion run
///
/// Row-level data problems never appear here: malformed numerics and missing
/// categoricals are coerced to defaults instead of failing the batch.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The CSV source does not exist; the store is left untouched
    #[error("Source file not found: {0}")]
    SourceNotFound(PathBuf),

    /// The CSV could not be parsed
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// The replace load failed; the transaction rolled back
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

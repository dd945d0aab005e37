//! CSV Ingestion Pipeline
//!
//! Loads a healthcare claims CSV into the claim store, replacing all prior
//! contents:
//!
//! ```text
//! CSV file -> parse -> coerce fields -> score batch -> transactional replace
//! ```
//!
//! The pipeline itself is a plain async function over a pool and a path, so
//! it can be tested without any scheduler; the API layer spawns it as a
//! detached task. Failures after the upload has been acknowledged are only
//! observable through logs and the untouched store.

pub mod reader;
pub mod pipeline;
pub mod error;

pub use reader::{read_records, RawClaimRecord};
pub use pipeline::{ingest_file, score_records, IngestReport};
pub use error::IngestError;

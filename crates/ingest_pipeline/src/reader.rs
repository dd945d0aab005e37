//! CSV source reader

use std::path::Path;

use serde::Deserialize;

use crate::error::IngestError;

/// One row of the source CSV, before any coercion.
///
/// Every field is optional: the csv crate maps empty cells to `None`, and the
/// coercion pass downstream turns those into sentinels or defaults. The
/// discharge date column is accepted but unused.
#[derive(Debug, Clone, Deserialize)]
pub struct RawClaimRecord {
    #[serde(rename = "Patient ID")]
    pub patient_id: Option<String>,
    #[serde(rename = "AGE")]
    pub age: Option<String>,
    #[serde(rename = "GENDER")]
    pub gender: Option<String>,
    #[serde(rename = "DATE OF ENCOUNTER")]
    pub encounter_date: Option<String>,
    #[serde(rename = "DATE OF DISCHARGE")]
    pub discharge_date: Option<String>,
    #[serde(rename = "DIAGNOSIS")]
    pub diagnosis: Option<String>,
    #[serde(rename = "Amount Billed")]
    pub amount_billed: Option<String>,
}

/// Reads all rows from a CSV source.
///
/// # Errors
///
/// Returns `IngestError::SourceNotFound` without reading anything if the
/// path does not exist, or `IngestError::Csv` if the file is structurally
/// unparseable. Either way the store has not been touched yet.
pub fn read_records(path: &Path) -> Result<Vec<RawClaimRecord>, IngestError> {
    if !path.exists() {
        return Err(IngestError::SourceNotFound(path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for result in reader.deserialize() {
        records.push(result?);
    }

    Ok(records)
}

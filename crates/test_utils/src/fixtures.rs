//! Canned CSV fixtures for ingestion tests

use std::fs;
use std::path::{Path, PathBuf};

/// Two diagnosis groups with known means.
///
/// Group A (amounts 100, 200; mean 150) scores 33 and 66; group B
/// (amounts 50, 150; mean 100) scores 25 and 75.
pub const TWO_GROUP_CSV: &str = "\
Patient ID,AGE,GENDER,DATE OF ENCOUNTER,DATE OF DISCHARGE,DIAGNOSIS,Amount Billed
PAT-001,34,F,2024-01-15,2024-01-18,A,100
PAT-002,61,M,2024-01-16,2024-01-20,A,200
PAT-003,45,F,2024-01-17,2024-01-17,B,50
PAT-004,29,M,2024-01-18,2024-01-22,B,150
";

/// Rows with missing and malformed fields: blank patient/diagnosis/amounts,
/// a non-numeric amount, and a missing age.
pub const DEGRADED_CSV: &str = "\
Patient ID,AGE,GENDER,DATE OF ENCOUNTER,DATE OF DISCHARGE,DIAGNOSIS,Amount Billed
,,,,,,
PAT-002,abc,M,2024-02-01,2024-02-03,TYPHOID,not-a-number
PAT-003,52,,2024-02-02,,TYPHOID,300
";

/// A header-only file: ingesting it empties the store.
pub const EMPTY_CSV: &str =
    "Patient ID,AGE,GENDER,DATE OF ENCOUNTER,DATE OF DISCHARGE,DIAGNOSIS,Amount Billed\n";

/// Writes CSV content into `dir` and returns the file path.
pub fn write_csv(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("failed to write CSV fixture");
    path
}

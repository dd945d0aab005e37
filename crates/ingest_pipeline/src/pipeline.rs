//! Ingestion pipeline
//!
//! Coercion rules, per spec of the source data:
//! - billed amounts that are missing or unparseable become 0
//! - missing patient/diagnosis labels become the "UNKNOWN" sentinel
//! - missing ages and genders stay absent
//! - the encounter date is stored opaquely, empty when missing
//!
//! The pipeline never fails a batch over row-level data quality; it prefers
//! completing with degraded data.

use std::path::Path;

use domain_claims::scoring::{normalize_amount, score_batch};
use domain_claims::{sequence_claim_id, Claim};
use infra_db::{ClaimsRepository, DatabasePool};

use crate::error::IngestError;
use crate::reader::{read_records, RawClaimRecord};

/// Sentinel stored when a categorical source field is missing
pub const UNKNOWN: &str = "UNKNOWN";

/// Outcome of a completed ingestion run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestReport {
    /// Rows loaded into the store
    pub rows_loaded: u64,
}

/// Loads a CSV source into the claim store, replacing all prior contents.
///
/// Claim ids are synthesized from row position (`CLM-0001`, `CLM-0002`, ...)
/// so every run renumbers from 1, and scoring baselines are scoped to this
/// file's rows only. The delete-and-insert runs in one transaction; readers
/// never observe a partially replaced store.
///
/// # Errors
///
/// Returns an error if the source is missing, structurally unparseable, or
/// the load fails - in all cases the store keeps its previous contents.
pub async fn ingest_file(
    pool: &DatabasePool,
    path: impl AsRef<Path>,
) -> Result<IngestReport, IngestError> {
    let path = path.as_ref();
    tracing::info!(path = %path.display(), "Loading claims data");

    let records = read_records(path)?;

    tracing::info!(rows = records.len(), "Calculating fraud scores");
    let claims = score_records(&records);

    let repo = ClaimsRepository::new(pool.clone());
    let rows_loaded = repo.replace_all(&claims).await?;

    tracing::info!(rows = rows_loaded, "Data ingestion complete");
    Ok(IngestReport { rows_loaded })
}

/// Coerces and scores a parsed batch into store-ready claims.
///
/// Pure with respect to the database, so the scoring path is testable
/// without a store.
pub fn score_records(records: &[RawClaimRecord]) -> Vec<Claim> {
    let grouped: Vec<(String, f64)> = records
        .iter()
        .map(|r| {
            (
                coerce_label(r.diagnosis.as_deref()),
                normalize_amount(r.amount_billed.as_deref()),
            )
        })
        .collect();

    let inputs: Vec<(&str, f64)> = grouped
        .iter()
        .map(|(diagnosis, amount)| (diagnosis.as_str(), *amount))
        .collect();
    let scores = score_batch(&inputs);

    records
        .iter()
        .zip(grouped)
        .zip(scores)
        .enumerate()
        .map(|(index, ((raw, (diagnosis, amount)), score))| {
            Claim::scored(
                sequence_claim_id(index + 1),
                coerce_label(raw.patient_id.as_deref()),
                diagnosis,
                coerce_age(raw.age.as_deref()),
                coerce_optional(raw.gender.as_deref()),
                amount,
                raw.encounter_date
                    .as_deref()
                    .map(str::trim)
                    .unwrap_or_default()
                    .to_string(),
                score,
            )
        })
        .collect()
}

fn coerce_label(value: Option<&str>) -> String {
    match value.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => s.to_string(),
        None => UNKNOWN.to_string(),
    }
}

fn coerce_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

fn coerce_age(value: Option<&str>) -> Option<i64> {
    let raw = value.map(str::trim).filter(|s| !s.is_empty())?;
    raw.parse::<i64>()
        .ok()
        .or_else(|| raw.parse::<f64>().ok().map(|v| v as i64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_fall_back_to_the_sentinel() {
        assert_eq!(coerce_label(None), "UNKNOWN");
        assert_eq!(coerce_label(Some("  ")), "UNKNOWN");
        assert_eq!(coerce_label(Some(" MALARIA ")), "MALARIA");
    }

    #[test]
    fn ages_parse_leniently() {
        assert_eq!(coerce_age(Some("34")), Some(34));
        assert_eq!(coerce_age(Some("34.0")), Some(34));
        assert_eq!(coerce_age(Some("unknown")), None);
        assert_eq!(coerce_age(None), None);
    }
}

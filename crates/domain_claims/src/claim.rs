//! Claim entity

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ClaimError;

/// Review status of a claim
///
/// The wire and storage representation uses the dashboard-facing labels
/// ("New", "Under Review", "Closed"). Any other label is rejected at the
/// review boundary rather than stored verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimStatus {
    /// Freshly ingested, not yet looked at
    #[default]
    New,
    /// An auditor has picked the claim up
    #[serde(rename = "Under Review")]
    UnderReview,
    /// Review finished
    Closed,
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ClaimStatus::New => "New",
            ClaimStatus::UnderReview => "Under Review",
            ClaimStatus::Closed => "Closed",
        };
        f.write_str(label)
    }
}

impl FromStr for ClaimStatus {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "New" => Ok(ClaimStatus::New),
            "Under Review" => Ok(ClaimStatus::UnderReview),
            "Closed" => Ok(ClaimStatus::Closed),
            other => Err(ClaimError::UnknownStatus(other.to_string())),
        }
    }
}

/// A scored healthcare claim
///
/// Every field except `status` is immutable once the claim has been ingested;
/// a full re-ingestion is the only way to change the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Synthetic identifier assigned at ingestion time (e.g. "CLM-0001")
    pub claim_id: String,
    /// Patient identifier, "UNKNOWN" when the source omitted it
    pub patient_id: String,
    /// Diagnosis label, "UNKNOWN" when the source omitted it
    pub diagnosis_code: String,
    /// Patient age, absent when missing or unparseable in the source
    pub age: Option<i64>,
    /// Patient gender, absent when missing in the source
    pub gender: Option<String>,
    /// Billed amount, coerced to 0 when missing or malformed
    pub claim_amount: f64,
    /// Encounter date, stored opaquely with no calendar validation
    pub date: String,
    /// Heuristic fraud score in [0, 100]
    pub fraud_score: i64,
    /// Review status
    pub status: ClaimStatus,
}

impl Claim {
    /// Creates a freshly scored claim with status `New`.
    ///
    /// The score is clamped to [0, 100] so the invariant holds regardless of
    /// what the scoring pass produced.
    #[allow(clippy::too_many_arguments)]
    pub fn scored(
        claim_id: String,
        patient_id: String,
        diagnosis_code: String,
        age: Option<i64>,
        gender: Option<String>,
        claim_amount: f64,
        date: String,
        fraud_score: i64,
    ) -> Self {
        Self {
            claim_id,
            patient_id,
            diagnosis_code,
            age,
            gender,
            claim_amount,
            date,
            fraud_score: fraud_score.clamp(0, crate::scoring::MAX_SCORE),
            status: ClaimStatus::New,
        }
    }
}

/// Builds the synthetic claim identifier for a 1-based row number.
///
/// Identifiers are sequence-derived, not taken from any source field, so
/// every ingestion renumbers from `CLM-0001`.
pub fn sequence_claim_id(number: usize) -> String {
    format!("CLM-{number:04}")
}

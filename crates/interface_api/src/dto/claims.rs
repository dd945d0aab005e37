//! Claims DTOs

use serde::{Deserialize, Serialize};

use domain_claims::ClaimStatus;
use infra_db::ClaimRecord;

/// Query parameters for the claim listing
#[derive(Debug, Default, Deserialize)]
pub struct ListClaimsQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
    pub min_score: Option<i64>,
    pub max_score: Option<i64>,
}

/// Review status update request
///
/// `status` is the closed status enum, so unrecognized labels are rejected
/// at deserialization instead of being stored verbatim.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: ClaimStatus,
}

/// A claim as returned to the dashboard
#[derive(Debug, Serialize)]
pub struct ClaimResponse {
    pub id: i64,
    pub claim_id: String,
    pub patient_id: String,
    pub diagnosis_code: String,
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub claim_amount: f64,
    pub date: String,
    pub fraud_score: i64,
    pub status: String,
}

impl From<ClaimRecord> for ClaimResponse {
    fn from(record: ClaimRecord) -> Self {
        Self {
            id: record.id,
            claim_id: record.claim_id,
            patient_id: record.patient_id,
            diagnosis_code: record.diagnosis_code,
            age: record.age,
            gender: record.gender,
            claim_amount: record.claim_amount,
            date: record.date,
            fraud_score: record.fraud_score,
            status: record.status,
        }
    }
}

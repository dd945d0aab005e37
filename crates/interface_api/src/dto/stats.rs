//! Stats, distribution, and ingestion DTOs

use serde::Serialize;

use infra_db::{ClaimStats, ScoreDistribution};

/// Summary statistics response
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_claims: i64,
    pub average_claim_amount: f64,
    pub flagged_claims_count: i64,
    pub flagged_claims_percentage: f64,
}

impl From<ClaimStats> for StatsResponse {
    fn from(stats: ClaimStats) -> Self {
        Self {
            total_claims: stats.total_claims,
            average_claim_amount: stats.average_claim_amount,
            flagged_claims_count: stats.flagged_claims_count,
            flagged_claims_percentage: stats.flagged_claims_percentage,
        }
    }
}

/// Score-band distribution response
#[derive(Debug, Serialize)]
pub struct DistributionResponse {
    pub low: i64,
    pub medium: i64,
    pub high: i64,
}

impl From<ScoreDistribution> for DistributionResponse {
    fn from(dist: ScoreDistribution) -> Self {
        Self {
            low: dist.low,
            medium: dist.medium,
            high: dist.high,
        }
    }
}

/// Acknowledgement returned as soon as an upload is accepted
///
/// Ingestion continues in the background; there is no completion callback.
#[derive(Debug, Serialize)]
pub struct IngestAccepted {
    pub message: String,
}

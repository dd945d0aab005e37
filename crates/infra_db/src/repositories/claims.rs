//! Claims repository implementation
//!
//! This module provides all database access for the claim store: the
//! transactional full-replace load used by ingestion, the filtered listing
//! and aggregate views used by the dashboard, and the review status update.

use sqlx::QueryBuilder;

use domain_claims::scoring::{FLAG_THRESHOLD, LOW_BAND_MAX};
use domain_claims::{Claim, ClaimStatus};

use crate::error::DatabaseError;
use crate::pool::DatabasePool;

/// Default page size for claim listings
pub const DEFAULT_PAGE_SIZE: i64 = 100;

const CLAIM_COLUMNS: &str = "id, claim_id, patient_id, diagnosis_code, age, gender, \
                             claim_amount, date, fraud_score, status";

/// Repository for the claim store
///
/// Handlers and the ingestion pipeline receive this by construction at
/// startup; it acquires a connection from the pool per operation.
#[derive(Debug, Clone)]
pub struct ClaimsRepository {
    pool: DatabasePool,
}

/// A persisted claim row
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ClaimRecord {
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

/// Filter and pagination options for claim listings
///
/// `search` matches case-insensitively as a substring against diagnosis code,
/// patient id, or claim id (OR semantics). Score bounds are inclusive and
/// independently optional.
#[derive(Debug, Clone)]
pub struct ClaimFilter {
    pub skip: i64,
    pub limit: i64,
    pub search: Option<String>,
    pub min_score: Option<i64>,
    pub max_score: Option<i64>,
}

impl Default for ClaimFilter {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_PAGE_SIZE,
            search: None,
            min_score: None,
            max_score: None,
        }
    }
}

/// Summary statistics over the whole store
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimStats {
    pub total_claims: i64,
    pub average_claim_amount: f64,
    pub flagged_claims_count: i64,
    pub flagged_claims_percentage: f64,
}

/// Score-band distribution over the whole store
///
/// The bands are mutually exclusive and exhaustive, so the counts always sum
/// to the total claim count.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreDistribution {
    pub low: i64,
    pub medium: i64,
    pub high: i64,
}

#[derive(sqlx::FromRow)]
struct StatsRow {
    total: i64,
    average_amount: f64,
    flagged: i64,
}

#[derive(sqlx::FromRow)]
struct DistributionRow {
    low: i64,
    medium: i64,
    high: i64,
}

impl ClaimsRepository {
    /// Creates a new repository backed by the given connection pool
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Atomically replaces the entire claim store with a freshly scored batch.
    ///
    /// Delete-all and insert-all run inside one transaction, so concurrent
    /// readers never observe an empty store or a mix of old and new rows.
    /// An empty batch is valid and leaves the store empty.
    ///
    /// # Returns
    ///
    /// The number of rows inserted
    pub async fn replace_all(&self, claims: &[Claim]) -> Result<u64, DatabaseError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM claims").execute(&mut *tx).await?;

        for claim in claims {
            sqlx::query(
                "INSERT INTO claims \
                 (claim_id, patient_id, diagnosis_code, age, gender, claim_amount, date, fraud_score, status) \
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(&claim.claim_id)
            .bind(&claim.patient_id)
            .bind(&claim.diagnosis_code)
            .bind(claim.age)
            .bind(claim.gender.as_deref())
            .bind(claim.claim_amount)
            .bind(&claim.date)
            .bind(claim.fraud_score)
            .bind(claim.status.to_string())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        tracing::info!(rows = claims.len(), "Replaced claim store contents");
        Ok(claims.len() as u64)
    }

    /// Lists claims matching the filter, ordered by insertion order.
    pub async fn list(&self, filter: &ClaimFilter) -> Result<Vec<ClaimRecord>, DatabaseError> {
        let mut query: QueryBuilder<sqlx::Sqlite> =
            QueryBuilder::new(format!("SELECT {CLAIM_COLUMNS} FROM claims WHERE 1 = 1"));

        if let Some(term) = filter.search.as_deref() {
            let pattern = format!("%{}%", term.to_lowercase());
            query
                .push(" AND (LOWER(diagnosis_code) LIKE ")
                .push_bind(pattern.clone())
                .push(" OR LOWER(patient_id) LIKE ")
                .push_bind(pattern.clone())
                .push(" OR LOWER(claim_id) LIKE ")
                .push_bind(pattern)
                .push(")");
        }

        if let Some(min) = filter.min_score {
            query.push(" AND fraud_score >= ").push_bind(min);
        }

        if let Some(max) = filter.max_score {
            query.push(" AND fraud_score <= ").push_bind(max);
        }

        query
            .push(" ORDER BY id LIMIT ")
            .push_bind(filter.limit)
            .push(" OFFSET ")
            .push_bind(filter.skip);

        let records = query
            .build_query_as::<ClaimRecord>()
            .fetch_all(&self.pool)
            .await?;

        Ok(records)
    }

    /// Retrieves a claim by its synthetic identifier
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no claim has that identifier
    pub async fn get_by_claim_id(&self, claim_id: &str) -> Result<ClaimRecord, DatabaseError> {
        let record = sqlx::query_as::<_, ClaimRecord>(&format!(
            "SELECT {CLAIM_COLUMNS} FROM claims WHERE claim_id = ?"
        ))
        .bind(claim_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Claim", claim_id))?;

        Ok(record)
    }

    /// Updates a claim's review status and returns the updated row.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no claim has that identifier;
    /// nothing is mutated in that case.
    pub async fn update_status(
        &self,
        claim_id: &str,
        status: ClaimStatus,
    ) -> Result<ClaimRecord, DatabaseError> {
        let record = sqlx::query_as::<_, ClaimRecord>(&format!(
            "UPDATE claims SET status = ? WHERE claim_id = ? RETURNING {CLAIM_COLUMNS}"
        ))
        .bind(status.to_string())
        .bind(claim_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Claim", claim_id))?;

        Ok(record)
    }

    /// Computes the dashboard summary statistics.
    ///
    /// An empty store yields all-zero stats; the flagged percentage is
    /// special-cased rather than dividing by zero. Monetary and percentage
    /// values are rounded to two decimal places.
    pub async fn stats(&self) -> Result<ClaimStats, DatabaseError> {
        let row = sqlx::query_as::<_, StatsRow>(
            "SELECT COUNT(*) AS total, \
                    COALESCE(AVG(claim_amount), 0.0) AS average_amount, \
                    COALESCE(SUM(CASE WHEN fraud_score > ? THEN 1 ELSE 0 END), 0) AS flagged \
             FROM claims",
        )
        .bind(FLAG_THRESHOLD)
        .fetch_one(&self.pool)
        .await?;

        let flagged_percentage = if row.total == 0 {
            0.0
        } else {
            round2(row.flagged as f64 / row.total as f64 * 100.0)
        };

        Ok(ClaimStats {
            total_claims: row.total,
            average_claim_amount: round2(row.average_amount),
            flagged_claims_count: row.flagged,
            flagged_claims_percentage: flagged_percentage,
        })
    }

    /// Computes the score-band distribution (low <= 25 < medium <= 75 < high).
    pub async fn score_distribution(&self) -> Result<ScoreDistribution, DatabaseError> {
        let row = sqlx::query_as::<_, DistributionRow>(
            "SELECT COALESCE(SUM(CASE WHEN fraud_score <= ? THEN 1 ELSE 0 END), 0) AS low, \
                    COALESCE(SUM(CASE WHEN fraud_score > ? AND fraud_score <= ? THEN 1 ELSE 0 END), 0) AS medium, \
                    COALESCE(SUM(CASE WHEN fraud_score > ? THEN 1 ELSE 0 END), 0) AS high \
             FROM claims",
        )
        .bind(LOW_BAND_MAX)
        .bind(LOW_BAND_MAX)
        .bind(FLAG_THRESHOLD)
        .bind(FLAG_THRESHOLD)
        .fetch_one(&self.pool)
        .await?;

        Ok(ScoreDistribution {
            low: row.low,
            medium: row.medium,
            high: row.high,
        })
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

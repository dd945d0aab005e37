//! Schema bootstrap
//!
//! The store is a single `claims` table. The schema is applied idempotently
//! at startup (and by tests against in-memory databases), mirroring the
//! create-on-startup behavior the dashboard deployment expects.

use crate::error::DatabaseError;
use crate::pool::DatabasePool;

/// The `claims` table and its filter indexes.
///
/// `claim_id` carries a UNIQUE constraint, which also serves as its lookup
/// index; `patient_id` and `diagnosis_code` get secondary indexes for the
/// search filter.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS claims (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    claim_id       TEXT    NOT NULL UNIQUE,
    patient_id     TEXT    NOT NULL,
    diagnosis_code TEXT    NOT NULL,
    age            INTEGER,
    gender         TEXT,
    claim_amount   REAL    NOT NULL DEFAULT 0,
    date           TEXT    NOT NULL DEFAULT '',
    fraud_score    INTEGER NOT NULL CHECK (fraud_score BETWEEN 0 AND 100),
    status         TEXT    NOT NULL DEFAULT 'New'
);

CREATE INDEX IF NOT EXISTS idx_claims_patient_id ON claims (patient_id);
CREATE INDEX IF NOT EXISTS idx_claims_diagnosis_code ON claims (diagnosis_code);
"#;

/// Applies the schema to the given pool.
///
/// Safe to call on every startup; existing tables and indexes are left
/// untouched.
///
/// # Errors
///
/// Returns `DatabaseError::SchemaFailed` if any statement fails to apply
pub async fn init_schema(pool: &DatabasePool) -> Result<(), DatabaseError> {
    tracing::info!("Applying claims schema");

    sqlx::raw_sql(SCHEMA)
        .execute(pool)
        .await
        .map_err(|e| DatabaseError::SchemaFailed(e.to_string()))?;

    Ok(())
}

//! Test data builders
//!
//! Builder for constructing test claims with sensible defaults, so tests
//! only spell out the fields they actually care about.

use domain_claims::Claim;

/// Builder for a test [`Claim`]
pub struct TestClaimBuilder {
    claim_id: String,
    patient_id: String,
    diagnosis_code: String,
    age: Option<i64>,
    gender: Option<String>,
    claim_amount: f64,
    date: String,
    fraud_score: i64,
}

impl Default for TestClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClaimBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            claim_id: "CLM-0001".to_string(),
            patient_id: "PAT-001".to_string(),
            diagnosis_code: "MALARIA".to_string(),
            age: Some(34),
            gender: Some("F".to_string()),
            claim_amount: 150.0,
            date: "2024-01-15".to_string(),
            fraud_score: 50,
        }
    }

    /// Sets the claim identifier
    pub fn with_claim_id(mut self, claim_id: impl Into<String>) -> Self {
        self.claim_id = claim_id.into();
        self
    }

    /// Sets the patient identifier
    pub fn with_patient_id(mut self, patient_id: impl Into<String>) -> Self {
        self.patient_id = patient_id.into();
        self
    }

    /// Sets the diagnosis code
    pub fn with_diagnosis(mut self, diagnosis: impl Into<String>) -> Self {
        self.diagnosis_code = diagnosis.into();
        self
    }

    /// Sets the billed amount
    pub fn with_amount(mut self, amount: f64) -> Self {
        self.claim_amount = amount;
        self
    }

    /// Sets the fraud score
    pub fn with_score(mut self, score: i64) -> Self {
        self.fraud_score = score;
        self
    }

    /// Builds the claim (status starts as `New`)
    pub fn build(self) -> Claim {
        Claim::scored(
            self.claim_id,
            self.patient_id,
            self.diagnosis_code,
            self.age,
            self.gender,
            self.claim_amount,
            self.date,
            self.fraud_score,
        )
    }
}

/// Builds `count` claims with sequential ids and the given scores.
pub fn claims_with_scores(scores: &[i64]) -> Vec<Claim> {
    scores
        .iter()
        .enumerate()
        .map(|(i, &score)| {
            TestClaimBuilder::new()
                .with_claim_id(domain_claims::sequence_claim_id(i + 1))
                .with_patient_id(format!("PAT-{:03}", i + 1))
                .with_score(score)
                .build()
        })
        .collect()
}
